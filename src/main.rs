mod cache;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod state;
mod store;
mod templates;

use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::io;

use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = AppState::from_config(&config)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let state = web::Data::new(state);

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
