use crate::{api::report, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let report_limiter = build_limiter(config.rate_report_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(report_limiter) // rate limiting
            .service(
                web::scope("/report")
                    // /report/attendance
                    .service(
                        web::resource("/attendance")
                            .route(web::get().to(report::get_report))
                            .route(web::post().to(report::compute_report)),
                    )
                    // /report/attendance/export
                    .service(
                        web::resource("/attendance/export")
                            .route(web::get().to(report::export_report)),
                    ),
            ),
    );
}
