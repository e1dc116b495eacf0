pub mod routes;
pub mod cors;
pub mod config;
pub mod error;
pub mod rate_limiter;
pub mod catchers;
pub mod screening;
pub use shared::user_info;

use std::path::PathBuf;
use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, payload_too_large, too_many_requests, unprocessable},
    cors::CORS,
    routes::{all_options, health, spa_handler, submit_contact, AppState},
};

/// Assembles the server: the contact form handler at `/`, the SPA from `static_dir`, and `/api` status routes.
pub fn build_rocket(state: AppState, static_dir: PathBuf) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(state)
        .manage(static_dir)
        .mount("/", routes![submit_contact, spa_handler, all_options])
        .mount("/api", routes![health])
        .register(
            "/",
            catchers![
                too_many_requests,
                bad_request,
                payload_too_large,
                unprocessable,
                internal_error,
                not_found
            ],
        )
}
