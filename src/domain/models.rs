use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single phonebook entry. `name` is the unique key within a store;
/// `id` is an opaque identifier assigned once at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone,
            street: street.into(),
            city: city.into(),
        }
    }

    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|phone| !phone.is_empty())
    }

    /// Derived view over `street` + `city`; never stored separately.
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Schema-level `YesNo` argument for `allPersons`: restrict the listing to
/// entries with a phone (`YES`) or without one (`NO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(name = "YesNo", rename_items = "SCREAMING_SNAKE_CASE")]
pub enum PhoneFilter {
    Yes,
    No,
}

impl PhoneFilter {
    pub fn matches(self, person: &Person) -> bool {
        match self {
            PhoneFilter::Yes => person.has_phone(),
            PhoneFilter::No => !person.has_phone(),
        }
    }
}
