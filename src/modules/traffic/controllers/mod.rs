pub mod traffic_controller;

use actix_web::web;

/// Configure routes for the traffic module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/traffic")
            .route("/hours", web::get().to(traffic_controller::hours))
            .route(
                "/hours/bylocations",
                web::get().to(traffic_controller::hours_by_locations),
            ),
    );
}
