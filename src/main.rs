use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use customer_portal::{
    config::Config,
    database::create_pool,
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    // Lazy pool: the server comes up even while the database is unreachable.
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    let analytics_service = AnalyticsService::new(pool.clone(), &config.analytics);
    let init_service = InitService::new(pool.clone(), config.seed);

    log::info!(
        "Customer Portal Backend API starting at {}:{} (analytics limit {}, users created after {})",
        config.server.host,
        config.server.port,
        config.analytics.limit,
        config.analytics.created_after,
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::from(pool.clone()))
            .app_data(web::Data::new(analytics_service.clone()))
            .app_data(web::Data::new(init_service.clone()))
            .configure(swagger_config)
            .configure(handlers::health_config)
            .service(
                web::scope("/api")
                    .configure(handlers::init_db_config)
                    .configure(handlers::customers_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
