pub mod public;
pub mod settings;

use actix_web::web;

/// Register every page route. Unknown paths go to [`public::not_found`],
/// which the app installs as its default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    settings::configure(cfg);
}
