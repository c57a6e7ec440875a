pub mod post_controller;

use actix_web::web;

/// Configure routes for the posts module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("/status", web::get().to(post_controller::status))
            .route(
                "/status/bylocations",
                web::get().to(post_controller::status_by_locations),
            ),
    );
}
