use std::sync::Arc;

use cache::DashboardStore;
use config::Config;
use directory::PhoneDirectory;

pub mod agent;
pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<DashboardStore>,
    pub directory: Arc<PhoneDirectory>,
}
