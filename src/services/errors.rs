use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("name must be unique")]
    DuplicateName(String),
    #[error("mirror unavailable: {0}")]
    Upstream(String),
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        let err = async_graphql::Error::new(self.to_string());
        match self {
            // Carry the offending value the way the original API did.
            ServiceError::DuplicateName(name) => {
                err.extend_with(|_, ext| ext.set("invalidArgs", name.as_str()))
            }
            ServiceError::Upstream(_) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use async_graphql::ErrorExtensions;

    #[test]
    fn duplicate_name_error_exposes_the_offending_value() {
        let err = ServiceError::DuplicateName("Midu".to_string()).extend();
        assert_eq!(err.message, "name must be unique");
        let extensions = err.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("invalidArgs"),
            Some(&async_graphql::Value::from("Midu"))
        );
    }
}
