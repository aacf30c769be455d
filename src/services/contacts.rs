use std::sync::Arc;

use tracing::info;

use crate::{
    domain::models::{Person, PhoneFilter},
    infrastructure::{config::ContactSource, state::AppState},
};

use super::errors::ServiceError;

/// All resolver logic for the phonebook schema. Resolvers stay thin and
/// delegate here; mutations always target the local store, while the listing
/// reads from whichever source the configuration names.
pub struct ContactService {
    state: Arc<AppState>,
}

impl ContactService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn person_count(&self) -> usize {
        self.state.store.count()
    }

    pub async fn all_persons(
        &self,
        filter: Option<PhoneFilter>,
    ) -> Result<Vec<Person>, ServiceError> {
        let persons = match self.state.config.contacts.source {
            ContactSource::Local => self.state.store.all(),
            // Known divergence: mutations are not reflected here until the
            // mirror itself picks them up.
            ContactSource::Mirror => self.state.mirror.fetch_persons().await?,
        };

        Ok(match filter {
            None => persons,
            Some(filter) => persons
                .into_iter()
                .filter(|person| filter.matches(person))
                .collect(),
        })
    }

    pub fn find_person(&self, name: &str) -> Option<Person> {
        self.state.store.find_by_name(name)
    }

    pub fn add_person(
        &self,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<Person, ServiceError> {
        let created = self.state.store.insert(Person::new(name, phone, street, city))?;
        info!(name = %created.name, id = %created.id, "person added");
        Ok(created)
    }

    pub fn edit_number(&self, name: &str, phone: String) -> Option<Person> {
        let updated = self.state.store.update_phone(name, phone);
        if let Some(person) = &updated {
            info!(name = %person.name, "phone number updated");
        }
        updated
    }
}
