//! GraphQL endpoint: schema assembly and the axum handlers serving it.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{http::GraphQLPlaygroundConfig, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::infrastructure::state::AppState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type PhonebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: Arc<AppState>) -> PhonebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(state: Arc<AppState>) -> Router {
    let schema = build_schema(state);
    Router::new()
        .route("/graphql", get(playground).post(handler))
        .with_state(schema)
}

async fn handler(State(schema): State<PhonebookSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
