pub mod comparison_controller;
pub mod detail_controller;
pub mod trend_controller;

use actix_web::web;

/// Configure routes for the revenue module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/revenue")
            .route("/trends/months", web::get().to(trend_controller::months_all))
            .route(
                "/trends/months/bylocations",
                web::get().to(trend_controller::months_by_locations),
            )
            .route("/trends/years", web::get().to(trend_controller::years_all))
            .route(
                "/trends/years/bylocations",
                web::get().to(trend_controller::years_by_locations),
            )
            .route(
                "/comparison/days",
                web::get().to(comparison_controller::days),
            )
            .route(
                "/comparison/months",
                web::get().to(comparison_controller::months),
            )
            .route(
                "/comparison/years",
                web::get().to(comparison_controller::years),
            )
            .route("/details/months", web::get().to(detail_controller::months))
            .route("/details/years", web::get().to(detail_controller::years)),
    );
}
