//! Service container for dependency injection
//!
//! Wires settings and the terminal probe into the query service.

use std::sync::Arc;

use crate::application::services::{QueryOptions, QueryService};
use crate::config::Settings;
use crate::infrastructure::traits::{RealTerminal, Terminal};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Terminal abstraction
    pub terminal: Arc<dyn Terminal>,

    /// Query processing
    pub query: QueryService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealTerminal))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, terminal: Arc<dyn Terminal>) -> Self {
        let query = QueryService::new(QueryOptions {
            echo_question: settings.echo_question,
        });
        let settings = Arc::new(settings);

        Self {
            settings,
            terminal,
            query,
        }
    }
}
