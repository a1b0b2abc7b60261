use actix_web::{HttpResponse, Result, web};

use crate::models::*;
use crate::services::InitService;

#[utoipa::path(
    post,
    path = "/api/init-db",
    tag = "system",
    responses(
        (status = 200, description = "Schema created and seeded, or already present", body = InitResponse),
        (status = 500, description = "Initialization failed and was rolled back", body = ApiError)
    )
)]
pub async fn init_db(init_service: web::Data<InitService>) -> Result<HttpResponse> {
    log::info!("Database initialization requested...");

    match init_service.initialize().await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(InitResponse::from(outcome))),
        Err(e) => {
            log::error!("Database initialization failed: {}", e.detail());
            Ok(HttpResponse::InternalServerError().json(
                ApiError::new("Database initialization failed", e.detail()).with_status("error"),
            ))
        }
    }
}

pub fn init_db_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/init-db", web::post().to(init_db));
}
