use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::employee::{EmployeeService, SeaOrmEmployeeRepository};
use service::influencer::{InfluencerService, SeaOrmInfluencerRepository};

use crate::openapi::ApiDoc;

pub mod employees;
pub mod influencers;

pub type Employees = EmployeeService<SeaOrmEmployeeRepository>;
pub type Influencers = InfluencerService<SeaOrmInfluencerRepository, SeaOrmEmployeeRepository>;

/// Shared handler state: one service per aggregate over a shared pool.
#[derive(Clone)]
pub struct ServerState {
    pub employees: Employees,
    pub influencers: Influencers,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(SeaOrmEmployeeRepository { db: db.clone() });
        let influencer_repo = Arc::new(SeaOrmInfluencerRepository { db });
        Self {
            employees: EmployeeService::new(employee_repo.clone()),
            influencers: InfluencerService::new(influencer_repo, employee_repo),
        }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let employee_routes = Router::new()
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get).put(employees::update).patch(employees::update).delete(employees::delete),
        );

    let influencer_routes = Router::new()
        .route("/influencers", get(influencers::list).post(influencers::create))
        .route(
            "/influencers/:id",
            get(influencers::get).put(influencers::update).patch(influencers::update).delete(influencers::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .merge(employee_routes)
        .merge(influencer_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
