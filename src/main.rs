use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use todo_api::api;
use todo_api::config::Config;
use todo_api::repository::database::Database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let todo_db = Database::new(&config.database_url).map_err(std::io::Error::other)?;
    todo_db.run_migrations().map_err(std::io::Error::other)?;
    let app_data = web::Data::new(todo_db);

    tracing::info!(host = %config.host, port = config.port, "Starting todo-api");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8000")
            .allowed_origin("http://127.0.0.1:3000")
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(app_data.clone())
            .configure(api::api::config)
            .default_service(web::route().to(api::api::not_found))
            .wrap(Logger::default())
            .wrap(cors)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
