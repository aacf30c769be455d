use async_graphql::{Object, SimpleObject, ID};

use crate::domain::models::{Address, Person};

/// Schema view of a stored [`Person`]. `address` is derived from the parent
/// record at resolution time and never stored.
pub struct PersonObject(pub Person);

#[Object(name = "Person")]
impl PersonObject {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn address(&self) -> AddressObject {
        AddressObject::from(self.0.address())
    }

    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Address")]
pub struct AddressObject {
    pub street: String,
    pub city: String,
}

impl From<Address> for AddressObject {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
        }
    }
}
