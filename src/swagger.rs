use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::init_db::init_db,
        handlers::customers::get_customers,
    ),
    components(
        schemas(
            ApiError,
            HealthResponse,
            SeedCounts,
            InitResponse,
            CustomerInsight,
            CustomersResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and database initialization"),
        (name = "analytics", description = "Customer lifetime analytics"),
    ),
    info(
        title = "Customer Portal API",
        version = "0.1.0",
        description = "Customer analytics backed by a deliberately expensive SQL query"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
