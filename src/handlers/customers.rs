use actix_web::{HttpResponse, Result, web};
use std::time::Instant;

use crate::models::*;
use crate::services::AnalyticsService;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "analytics",
    responses(
        (status = 200, description = "Top customers by lifetime value", body = CustomersResponse),
        (status = 500, description = "Analytics query failed", body = ApiError)
    )
)]
pub async fn get_customers(analytics_service: web::Data<AnalyticsService>) -> Result<HttpResponse> {
    let started = Instant::now();
    log::info!("Customer analytics request received...");

    match analytics_service.customer_insights().await {
        Ok(data) => {
            let query_time = format_query_time(started.elapsed());
            log::info!(
                "Query completed in {query_time}, returning {} rows",
                data.len()
            );
            Ok(HttpResponse::Ok().json(CustomersResponse::new(data, query_time)))
        }
        Err(e) => {
            let query_time = format_query_time(started.elapsed());
            log::error!("Database error after {query_time}: {}", e.detail());
            Ok(HttpResponse::InternalServerError().json(
                ApiError::new(
                    "Database query failed - likely due to timeout or excessive resource usage",
                    e.detail(),
                )
                .with_query_time(query_time),
            ))
        }
    }
}

pub fn customers_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/customers", web::get().to(get_customers));
}
