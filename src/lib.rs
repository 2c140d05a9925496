pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handler;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

use config::Config;
use db::DBClient;

/// Shared by every handler through an `Extension<Arc<AppState>>`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: DBClient,
}

impl AppState {
    pub fn new(db_client: DBClient, config: Config) -> Self {
        Self {
            env: config,
            db_client,
        }
    }
}
