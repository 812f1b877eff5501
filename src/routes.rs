use crate::{
    api::{self, attendance, dashboard, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer limiter allowing `requests_per_min` with an equal burst.
pub fn build_rate_limit(requests_per_min: u32) -> Option<RateLimit> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(requests_per_min)).max(1);
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, rate_limit: &RateLimit) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(rate_limit))
            .configure(api_routes),
    );
}

/// Every API route, relative to the API prefix.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(api::health)))
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                // /employees/{employee_id}/calendar
                .service(
                    web::resource("/{employee_id}/calendar")
                        .route(web::get().to(dashboard::employee_calendar)),
                )
                // /employees/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(
                    web::resource("")
                        .route(web::get().to(attendance::list_attendance))
                        .route(web::post().to(attendance::mark_attendance)),
                )
                // /attendance/stats/{employee_id}
                .service(
                    web::resource("/stats/{employee_id}")
                        .route(web::get().to(attendance::attendance_stats)),
                ),
        )
        .service(web::resource("/dashboard").route(web::get().to(dashboard::dashboard)))
        .service(web::resource("/roster").route(web::get().to(dashboard::roster)));
}
