//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Version prefix shared by every route.
pub const API_VERSION: &str = "/v1";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_VERSION)
            .route("", web::get().to(health::health_check))
            .route("/", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            ),
    );
}
