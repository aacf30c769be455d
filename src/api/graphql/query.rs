use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    domain::models::PhoneFilter, infrastructure::state::AppState,
    services::contacts::ContactService,
};

use super::types::PersonObject;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of entries in the local store.
    async fn person_count(&self, ctx: &Context<'_>) -> usize {
        let service = ContactService::new(ctx.data_unchecked::<Arc<AppState>>().clone());
        service.person_count()
    }

    /// The full person list, optionally restricted to entries with (`YES`) or
    /// without (`NO`) a phone number.
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        phone: Option<PhoneFilter>,
    ) -> Result<Vec<PersonObject>> {
        let service = ContactService::new(ctx.data_unchecked::<Arc<AppState>>().clone());
        let persons = service
            .all_persons(phone)
            .await
            .map_err(|err| err.extend())?;
        Ok(persons.into_iter().map(PersonObject).collect())
    }

    /// Exact-name lookup; null when no entry matches.
    async fn find_person(&self, ctx: &Context<'_>, name: String) -> Result<Option<PersonObject>> {
        let service = ContactService::new(ctx.data_unchecked::<Arc<AppState>>().clone());
        Ok(service.find_person(&name).map(PersonObject))
    }
}
