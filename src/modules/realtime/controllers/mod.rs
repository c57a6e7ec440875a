pub mod realtime_controller;

use actix_web::web;

/// Configure routes for the realtime module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/realtime")
            .route("", web::get().to(realtime_controller::breakdown))
            .route(
                "/bylocations",
                web::get().to(realtime_controller::breakdown_by_locations),
            )
            .route(
                "/locations",
                web::get().to(realtime_controller::location_snapshots),
            ),
    )
    .route(
        "/summary/cards",
        web::get().to(realtime_controller::summary_cards),
    );
}
