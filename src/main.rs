use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkdash::config::Config;
use parkdash::middleware::SessionExtractor;
use parkdash::modules;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkdash=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting Parkdash Revenue Reporting Backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            // Outermost-last: logging wraps CORS wraps session extraction
            .wrap(SessionExtractor)
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .service(
                web::scope("/api")
                    .configure(modules::locations::controllers::configure)
                    .configure(modules::income::controllers::configure)
                    .configure(modules::revenue::controllers::configure)
                    .configure(modules::trouble::controllers::configure)
                    .configure(modules::realtime::controllers::configure)
                    .configure(modules::traffic::controllers::configure)
                    .configure(modules::posts::controllers::configure),
            )
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "parkdash"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Parkdash Revenue Reporting Backend",
        "version": "0.1.0",
        "status": "running"
    }))
}
