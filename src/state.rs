//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::KvStore;

/// Link service shared by all handlers, over whichever store the server was started with.
pub type SharedLinkService = Arc<LinkService<dyn KvStore>>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: SharedLinkService,
}

impl AppState {
    /// Builds the state around a store handle.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
        }
    }
}
