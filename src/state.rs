use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::Database;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Arc<dyn Database>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn Database>) -> Self {
        Self { config, db }
    }
}
