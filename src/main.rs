use std::error::Error;

use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    json_file_bookings::JsonFileBookings, local_bookings::LocalBookings,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod backend;
mod booking_store;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod json_file_bookings;
mod local_bookings;
mod slot_validator;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await?;

    let app = if configuration.in_memory() {
        warn!("Bookings are kept in memory and lost on restart");
        create_app(LocalBookings::default(), configuration.clone())
    } else {
        let backend = JsonFileBookings::new(configuration.data_file())?;
        info!(path = %backend.path().display(), "Persisting bookings");
        create_app(backend, configuration.clone())
    };
    if configuration.serialize_writes() {
        info!("Booking writes are serialized");
    }

    info!("Meeting booker listening on {address}");
    axum::serve(listener, app).await?;
    Ok(())
}
