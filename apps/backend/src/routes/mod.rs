use actix_web::web;

pub mod games;
pub mod publishers;
pub mod testers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure)
        .configure(publishers::configure_routes)
        .configure(testers::configure_routes)
        .configure(games::configure_routes);
}
