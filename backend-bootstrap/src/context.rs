use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, Metrics};
use backend_domain::AssetResolver;
use backend_infrastructure::{
    AppConfig, JsonCatalogRepository, JsonScheduleRepository, JsonTemplateRepository,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let catalog_repo = Arc::new(JsonCatalogRepository::new(&runtime_config.catalog_path));
        let template_repo = Arc::new(JsonTemplateRepository::new(&runtime_config.templates_path));
        let schedule_repo = Arc::new(JsonScheduleRepository::new(&runtime_config.schedule_dir));
        let resolver = Arc::new(AssetResolver::new(
            &runtime_config.base_asset_url,
            &runtime_config.rarity_folders,
        ));

        let state = AppState {
            config: runtime_config,
            catalog_repo,
            template_repo,
            schedule_repo,
            resolver,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
