use std::sync::Arc;

use crate::agent::AgentClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub agent: Arc<AgentClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            agent: Arc::new(AgentClient::new()),
        }
    }
}
