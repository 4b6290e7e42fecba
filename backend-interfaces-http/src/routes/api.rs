use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    catalog_handlers, ops_handlers, schedule_handlers, template_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/items",
            axum::routing::get(catalog_handlers::list_items)
                .post(catalog_handlers::create_item),
        )
        .route(
            "/api/items/:key",
            axum::routing::get(catalog_handlers::get_item)
                .put(catalog_handlers::update_item)
                .delete(catalog_handlers::delete_item),
        )
        .route(
            "/api/assets/resolve",
            axum::routing::get(catalog_handlers::resolve_asset),
        )
        .route(
            "/api/qafalas/templates",
            axum::routing::get(template_handlers::list_templates)
                .post(template_handlers::upsert_template),
        )
        .route(
            "/api/qafalas/templates/:slot",
            axum::routing::get(template_handlers::get_template)
                .delete(template_handlers::delete_template),
        )
        .route(
            "/api/qafalas/:date/sync",
            axum::routing::post(schedule_handlers::sync_day),
        )
        .route(
            "/api/qafalas/:date",
            axum::routing::get(schedule_handlers::get_day),
        )
        .route(
            "/api/qafalas/:date/:slot/items",
            axum::routing::put(schedule_handlers::merge_items),
        )
        .route(
            "/api/qafalas/:date/:slot/items/:key/stock",
            axum::routing::put(schedule_handlers::set_stock),
        )
        .route(
            "/api/qafalas/:date/:slot/window",
            axum::routing::put(schedule_handlers::set_window),
        )
        .route(
            "/api/qafalas/:date/:slot/status",
            axum::routing::post(schedule_handlers::transition),
        )
        .route(
            "/api/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/api/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/api/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
