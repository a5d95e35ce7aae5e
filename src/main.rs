use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use content_dashboard::openapi::ApiDoc;
use content_dashboard::routes::configure_routes;
use content_dashboard::services::{AggregationService, FeedService};
use content_dashboard::store::{seed::seed_demo_data, ContentStore};

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&**doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match content_dashboard::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting content-dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // The store is the sole owner of mutable state; services hold a shared
    // handle. Lifecycle is owned here, not by module-level globals.
    let store = Arc::new(ContentStore::new());
    seed_demo_data(&store).await;

    let feed = Arc::new(FeedService::new(store.clone(), config.feed.clone()));
    let aggregation = Arc::new(
        AggregationService::new(config.providers.clone(), store.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let store_data = web::Data::new(store);
    let feed_data = web::Data::new(feed);
    let aggregation_data = web::Data::new(aggregation);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc))
            .app_data(store_data.clone())
            .app_data(feed_data.clone())
            .app_data(aggregation_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/api/v1/openapi.json", web::get().to(openapi_json))
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
