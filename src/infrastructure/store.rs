use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::models::Person;
use crate::services::errors::ServiceError;

/// Backing store for phonebook entries. The in-memory implementation below is
/// the only one today; the seam exists so a persistent backend can be swapped
/// in without touching the resolver layer.
pub trait ContactStore: Send + Sync {
    fn count(&self) -> usize;
    fn all(&self) -> Vec<Person>;
    fn find_by_name(&self, name: &str) -> Option<Person>;
    /// Appends a new entry. Fails with [`ServiceError::DuplicateName`] if the
    /// name is already taken; the store is unchanged in that case.
    fn insert(&self, person: Person) -> Result<Person, ServiceError>;
    /// Replaces only the phone of the named entry, in place. `None` on miss.
    fn update_phone(&self, name: &str, phone: String) -> Option<Person>;
}

/// Process-lifetime store guarded by a single lock. Insert checks uniqueness
/// and pushes under one write acquisition, so concurrent adds cannot both
/// claim the same name.
#[derive(Default)]
pub struct InMemoryContactStore {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryContactStore {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }

    /// The three tutorial records the service boots with. Itzi has no phone.
    pub fn seeded() -> Self {
        Self::new(vec![
            Person {
                id: Uuid::new_v4(),
                name: "Midu".to_string(),
                phone: Some("034-1234567".to_string()),
                street: "Calle Frontend".to_string(),
                city: "Barcelona".to_string(),
            },
            Person {
                id: Uuid::new_v4(),
                name: "Youseff".to_string(),
                phone: Some("044-123456".to_string()),
                street: "Avenida Fullstack".to_string(),
                city: "Mataro".to_string(),
            },
            Person {
                id: Uuid::new_v4(),
                name: "Itzi".to_string(),
                phone: None,
                street: "Pasaje Testing".to_string(),
                city: "Ibiza".to_string(),
            },
        ])
    }
}

impl ContactStore for InMemoryContactStore {
    fn count(&self) -> usize {
        self.persons.read().len()
    }

    fn all(&self) -> Vec<Person> {
        self.persons.read().clone()
    }

    fn find_by_name(&self, name: &str) -> Option<Person> {
        self.persons
            .read()
            .iter()
            .find(|person| person.name == name)
            .cloned()
    }

    fn insert(&self, person: Person) -> Result<Person, ServiceError> {
        let mut persons = self.persons.write();
        if persons.iter().any(|existing| existing.name == person.name) {
            return Err(ServiceError::DuplicateName(person.name));
        }
        persons.push(person.clone());
        Ok(person)
    }

    fn update_phone(&self, name: &str, phone: String) -> Option<Person> {
        let mut persons = self.persons.write();
        let person = persons.iter_mut().find(|person| person.name == name)?;
        person.phone = Some(phone);
        Some(person.clone())
    }
}
