use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealtrack::config::Config;
use dealtrack::middleware::RequestId;
use dealtrack::modules::commissions::{
    configure_commission_routes, CommissionEngine, CommissionPolicy,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealtrack=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Build the commission engine once; it is stateless and shared across
    // workers without coordination
    let policy = CommissionPolicy::default();
    policy
        .validate()
        .context("Commission policy validation failed")?;
    let engine = web::Data::new(CommissionEngine::new(policy));

    tracing::info!("Starting DealTrack Commission Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let development = config.is_development();

    let server = HttpServer::new(move || {
        let cors = if development {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(cors)
            .app_data(engine.clone())
            .configure(configure_commission_routes)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "dealtrack"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "DealTrack Commission Service",
        "version": "0.1.0",
        "status": "running"
    }))
}
