pub mod trouble_controller;

use actix_web::web;

/// Configure routes for the trouble module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trouble")
            .route("/days", web::get().to(trouble_controller::days))
            .route("/months", web::get().to(trouble_controller::months))
            .route("/years", web::get().to(trouble_controller::years)),
    );
}
