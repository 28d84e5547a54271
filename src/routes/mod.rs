// Route exports
pub mod cities;

use actix_web::web;

pub use cities::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(cities::configure);
}
