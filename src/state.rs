use crate::source::DataSource;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<DataSource>,
    pub client: Client,
}

impl AppState {
    pub fn new(source: DataSource) -> Self {
        Self {
            source: Arc::new(source),
            client: Client::new(),
        }
    }
}
