use std::sync::Arc;

use crate::infrastructure::{config::Config, mirror::MirrorClient, store::ContactStore};
use crate::services::errors::ServiceError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ContactStore>,
    pub mirror: MirrorClient,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn ContactStore>) -> Result<Self, ServiceError> {
        let mirror = MirrorClient::new(&config.mirror.base_url)?;
        Ok(Self {
            config,
            store,
            mirror,
        })
    }
}
