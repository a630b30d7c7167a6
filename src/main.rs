#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use handler::{
    api_handler::api_version,
    catchers::{not_found, server_error, unprocessable},
    folder_handler::{create_folder, delete_folder, get_folder, list_folders, update_folder},
    note_handler::{create_note, delete_note, get_note, list_notes, update_note},
};

use crate::config::{CONFIG_FILE, NOTEFUL_CONFIG};
use crate::repository::{initialize_db, Database};

mod config;
mod db_migrations;
mod handler;
mod logging;
mod model;
mod repository;
mod service;
#[cfg(test)]
mod test;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = NOTEFUL_CONFIG.clone();
    if let Err(e) = logging::init_logging(&config.log) {
        eprintln!("Failed to initialize logging: {e}");
    }
    if !Path::new(CONFIG_FILE).exists() {
        log::warn!("No config file found. Continuing startup...");
    }
    build_rocket(Database::new(config.database.location))
}

/// builds the server around the passed database. The database is created or migrated when rocket ignites
pub fn build_rocket(db: Database) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .attach(AdHoc::try_on_ignite("Database Setup", |rocket| async move {
            let Some(db) = rocket.state::<Database>() else {
                log::error!("No database is configured!");
                return Err(rocket);
            };
            let result = initialize_db(db);
            match result {
                Ok(()) => Ok(rocket),
                Err(e) => {
                    log::error!("Failed to initialize the database: {e:?}");
                    Err(rocket)
                }
            }
        }))
        .mount("/api", routes![api_version])
        .mount(
            "/api/folders",
            routes![
                list_folders,
                get_folder,
                create_folder,
                update_folder,
                delete_folder
            ],
        )
        .mount(
            "/api/notes",
            routes![list_notes, get_note, create_note, update_note, delete_note],
        )
        .register("/", catchers![not_found, unprocessable, server_error])
}
