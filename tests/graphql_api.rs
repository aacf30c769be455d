use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use phonebook::{
    api,
    infrastructure::{config::Config, state::AppState, store::InMemoryContactStore},
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_app() -> Result<Router> {
    let config = Arc::new(Config::default());
    let store = Arc::new(InMemoryContactStore::seeded());
    let state = Arc::new(AppState::new(config, store)?);
    Ok(api::build_router(state))
}

async fn execute(app: &Router, query: &str) -> Result<Value> {
    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))?;

    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn person_count_matches_store_length() -> Result<()> {
    let app = build_app()?;

    let body = execute(&app, "{ personCount }").await?;

    assert_eq!(body["data"]["personCount"], json!(3));
    Ok(())
}

#[tokio::test]
async fn all_persons_phone_no_returns_only_entries_without_phone() -> Result<()> {
    let app = build_app()?;

    let body = execute(&app, "{ allPersons(phone: NO) { name } }").await?;

    assert_eq!(body["data"]["allPersons"], json!([{ "name": "Itzi" }]));
    Ok(())
}

#[tokio::test]
async fn all_persons_without_argument_returns_everything() -> Result<()> {
    let app = build_app()?;

    let body = execute(&app, "{ allPersons { name phone } }").await?;

    let persons = body["data"]["allPersons"]
        .as_array()
        .expect("allPersons is a list");
    assert_eq!(persons.len(), 3);
    assert_eq!(persons[0]["name"], "Midu");
    assert_eq!(persons[2]["phone"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn find_person_returns_match_or_null() -> Result<()> {
    let app = build_app()?;

    let body = execute(
        &app,
        r#"{ findPerson(name: "Midu") { name address { street city } } }"#,
    )
    .await?;
    assert_eq!(
        body["data"]["findPerson"],
        json!({
            "name": "Midu",
            "address": { "street": "Calle Frontend", "city": "Barcelona" }
        })
    );

    let body = execute(&app, r#"{ findPerson(name: "Nadie") { name } }"#).await?;
    assert_eq!(body["data"]["findPerson"], Value::Null);
    assert!(body.get("errors").is_none());
    Ok(())
}

#[tokio::test]
async fn add_person_creates_entry_with_derived_address() -> Result<()> {
    let app = build_app()?;

    let body = execute(
        &app,
        r#"mutation {
            addPerson(name: "Ada", phone: "099-000", street: "Analytical Way", city: "London") {
                name phone id address { street city }
            }
        }"#,
    )
    .await?;

    let created = &body["data"]["addPerson"];
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["phone"], "099-000");
    assert_eq!(
        created["address"],
        json!({ "street": "Analytical Way", "city": "London" })
    );
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

    let body = execute(&app, "{ personCount }").await?;
    assert_eq!(body["data"]["personCount"], json!(4));
    Ok(())
}

#[tokio::test]
async fn add_person_with_taken_name_fails_and_leaves_store_unchanged() -> Result<()> {
    let app = build_app()?;

    let body = execute(
        &app,
        r#"mutation {
            addPerson(name: "Midu", street: "Otra Calle", city: "Madrid") { name }
        }"#,
    )
    .await?;

    let error = &body["errors"][0];
    assert_eq!(error["message"], "name must be unique");
    assert_eq!(error["extensions"]["invalidArgs"], "Midu");

    let body = execute(&app, "{ personCount }").await?;
    assert_eq!(body["data"]["personCount"], json!(3));
    Ok(())
}

#[tokio::test]
async fn edit_number_changes_only_the_phone() -> Result<()> {
    let app = build_app()?;

    let body = execute(
        &app,
        r#"mutation {
            editNumber(name: "Itzi", phone: "555-111") {
                name phone address { street city }
            }
        }"#,
    )
    .await?;

    assert_eq!(
        body["data"]["editNumber"],
        json!({
            "name": "Itzi",
            "phone": "555-111",
            "address": { "street": "Pasaje Testing", "city": "Ibiza" }
        })
    );

    let body = execute(&app, "{ personCount allPersons(phone: NO) { name } }").await?;
    assert_eq!(body["data"]["personCount"], json!(3));
    assert_eq!(body["data"]["allPersons"], json!([]));
    Ok(())
}

#[tokio::test]
async fn edit_number_on_missing_name_returns_null() -> Result<()> {
    let app = build_app()?;

    let body = execute(
        &app,
        r#"mutation { editNumber(name: "Nadie", phone: "555-111") { name } }"#,
    )
    .await?;

    assert_eq!(body["data"]["editNumber"], Value::Null);
    assert!(body.get("errors").is_none());

    let body = execute(&app, "{ personCount }").await?;
    assert_eq!(body["data"]["personCount"], json!(3));
    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_not_found() -> Result<()> {
    let app = build_app()?;

    let request = Request::builder()
        .method("GET")
        .uri("/missing")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
