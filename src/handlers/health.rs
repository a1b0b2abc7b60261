use actix_web::{HttpResponse, Result, web};

use sea_orm::DatabaseConnection;

use crate::database::ping;
use crate::models::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(pool: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    match ping(&pool).await {
        Ok(()) => Ok(HttpResponse::Ok().json(HealthResponse::healthy())),
        Err(e) => {
            log::warn!("Health check failed: {}", e.detail());
            Ok(HttpResponse::InternalServerError().json(HealthResponse::unhealthy(e.detail())))
        }
    }
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
