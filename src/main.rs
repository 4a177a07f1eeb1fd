mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::repositories::{MongoAlertRepository, MongoUserRepository, SqlxCommentRepository};
use crate::services::{AlertService, CommentService, UserService};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| startup_error("Failed to connect to MongoDB", e))?;
    let db = client.database(&CONFIG.database_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| startup_error("Failed to ping MongoDB", e))?;
    info!("Connected to MongoDB successfully!");

    let user_repository = MongoUserRepository::new(&db);
    user_repository
        .create_indexes()
        .await
        .map_err(|e| startup_error("Failed to create user indexes", e))?;
    let alert_repository = MongoAlertRepository::new(&db);

    info!("Connecting to PostgreSQL...");
    let comment_repository =
        SqlxCommentRepository::connect(&CONFIG.database_url, CONFIG.database_max_connections)
            .await
            .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?;
    comment_repository
        .migrate()
        .await
        .map_err(|e| startup_error("Failed to run migrations", e))?;
    info!("Connected to PostgreSQL successfully!");

    let user_service = web::Data::new(UserService::new(
        Arc::new(user_repository),
        CONFIG.bcrypt_cost,
    ));
    let comment_service = web::Data::new(CommentService::new(Arc::new(comment_repository)));
    let alert_service = web::Data::new(AlertService::new(Arc::new(alert_repository)));

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);
    info!("Swagger UI available at http://{}/swagger-ui/", server_addr);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(comment_service.clone())
            .app_data(alert_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
