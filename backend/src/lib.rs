pub mod catchers;
pub mod error;
pub mod routes;
pub mod store;
pub mod utils;

pub use shared::models::*;

use rocket::{Build, Rocket, catchers, routes};

pub fn build_rocket(state: routes::AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/voters",
            routes![
                routes::list_voters,
                routes::get_voter,
                routes::create_voter,
                routes::update_voter,
                routes::delete_voter,
                routes::delete_all_voters,
                routes::get_voter_polls,
                routes::get_voter_poll,
                routes::add_voter_poll,
                routes::update_voter_poll,
                routes::delete_voter_poll,
                routes::health
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::conflict,
                catchers::internal_error
            ],
        )
}

#[cfg(test)]
mod tests;
