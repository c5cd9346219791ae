use crate::{
    config::AppConfig,
    routes::apply_routes,
    services::stop_finder::StopFinder,
    templates::{PageTemplates, TemplateError},
    types::app_state::AppState,
};
use axum::Router;
use tower_http::cors::CorsLayer;

pub fn gen_app(config: AppConfig) -> Result<Router, TemplateError> {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        stop_finder: StopFinder::new(config.geocoding, config.transit),
        map_display_key: config.map_display_key,
        templates: PageTemplates::new()?,
    };

    Ok(apply_routes(Router::new())
        .layer(cors_middleware)
        .with_state(state))
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub geocoding_server: mockito::ServerGuard,
    pub transit_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use crate::services::{
        geocoding_client::geocoding_service::GeocodingServiceConfig,
        transit_client::transit_service::TransitServiceConfig,
    };

    let geocoding_server = mockito::Server::new_async().await;
    let transit_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        bind_address: "127.0.0.1:0".to_string(),
        geocoding: GeocodingServiceConfig {
            access_token: "geocoding-token".to_string(),
            host: geocoding_server.url(),
        },
        transit: TransitServiceConfig {
            api_key: "transit-key".to_string(),
            host: transit_server.url(),
        },
        map_display_key: Some("publicmapkey".to_string()),
    })
    .expect("Failed to build app");

    MockApp {
        app,
        geocoding_server,
        transit_server,
    }
}
