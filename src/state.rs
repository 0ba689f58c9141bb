use std::sync::Arc;

use crate::config::Config;
use crate::urls::QueryStringUrls;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub urls: QueryStringUrls,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            urls: QueryStringUrls,
        }
    }
}
