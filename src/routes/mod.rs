use actix_web::web;

use crate::handlers;
use crate::middleware::query_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/users")
                .route("", web::post().to(handlers::create_user))
                .route("", web::get().to(handlers::get_users))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::patch().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        )
        .service(
            web::scope("/comments")
                .route("", web::post().to(handlers::create_comment))
                .route("", web::get().to(handlers::get_comments))
                .route("/{id}", web::get().to(handlers::get_comment))
                .route("/{id}", web::patch().to(handlers::update_comment))
                .route("/{id}", web::delete().to(handlers::delete_comment)),
        )
        .service(
            web::scope("/alerts")
                .route("", web::post().to(handlers::create_alert))
                .route("", web::get().to(handlers::get_alerts))
                .route("/{id}", web::get().to(handlers::get_alert))
                .route("/{id}", web::patch().to(handlers::update_alert))
                .route("/{id}", web::delete().to(handlers::delete_alert)),
        );
}
