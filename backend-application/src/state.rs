use std::sync::Arc;

use backend_domain::ports::{CatalogRepository, ScheduleRepository, TemplateRepository};
use backend_domain::{AssetResolver, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub catalog_repo: Arc<dyn CatalogRepository>,
    pub template_repo: Arc<dyn TemplateRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub resolver: Arc<AssetResolver>,
    pub metrics: Arc<Metrics>,
}
