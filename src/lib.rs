use std::sync::Arc;

use poem::{
    endpoint::make_sync,
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    web::Redirect,
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use route::{group::ApiGroup, schedule::ApiSchedule, subject::ApiSubject, teacher::ApiTeacher};
use settings::Config;
use sqlx::{Pool, Postgres};

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;

pub struct AppState {
    pub db: Pool<Postgres>,
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone().unwrap_or("/api".to_string());
    let openapi_route =
        OpenApiService::new((ApiGroup, ApiSubject, ApiTeacher, ApiSchedule), "Schedule", "1.0")
            .server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    let ui_url = config.ui_url.clone().unwrap_or("/docs".to_string());
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("/openapi.json", openapi_json_endpoint)
        .at("/", make_sync(move |_| Redirect::temporary(ui_url.clone())))
        .with(AddData::new(app_state))
        .with(Cors::new())
}
