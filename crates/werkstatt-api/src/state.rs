//! Application state shared by the HTTP handlers.
//!
//! AppState pins the generic answer engine to the thread-RNG picker and
//! holds the page catalog and template store.

use std::sync::Arc;

use werkstatt_core::answer::engine::AnswerEngine;
use werkstatt_core::site::catalog::PageCatalog;
use werkstatt_infra::picker::ThreadRngPicker;
use werkstatt_infra::templates::TemplateStore;
use werkstatt_types::config::WerkstattConfig;

pub type ConcreteAnswerEngine = AnswerEngine<ThreadRngPicker>;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConcreteAnswerEngine>,
    pub catalog: PageCatalog,
    pub templates: Arc<TemplateStore>,
    pub config: Arc<WerkstattConfig>,
}

impl AppState {
    /// Wire the services from a loaded configuration.
    pub fn new(config: WerkstattConfig) -> Self {
        let engine = AnswerEngine::new(ThreadRngPicker, config.answers.match_threshold);
        let templates = TemplateStore::new(&config.server.templates_dir);

        Self {
            engine: Arc::new(engine),
            catalog: PageCatalog::new(),
            templates: Arc::new(templates),
            config: Arc::new(config),
        }
    }
}
