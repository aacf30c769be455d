use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{infrastructure::state::AppState, services::contacts::ContactService};

use super::types::PersonObject;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a new entry. Fails with a `name must be unique` error carrying
    /// the offending value under `invalidArgs` when the name is taken.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<PersonObject> {
        let service = ContactService::new(ctx.data_unchecked::<Arc<AppState>>().clone());
        let person = service
            .add_person(name, phone, street, city)
            .map_err(|err| err.extend())?;
        Ok(PersonObject(person))
    }

    /// Replaces only the phone of the named entry; null when the name is
    /// unknown, leaving the store untouched.
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> Result<Option<PersonObject>> {
        let service = ContactService::new(ctx.data_unchecked::<Arc<AppState>>().clone());
        Ok(service.edit_number(&name, phone).map(PersonObject))
    }
}
