use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "meeting_booker", about = "Books meetings on a shared calendar")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// JSON file holding the booking collection
    #[arg(long, env = "BOOKINGS_FILE", default_value = "bookings.json")]
    data_file: PathBuf,

    /// Keep bookings in memory only (lost on restart)
    #[arg(long, env = "BOOKINGS_IN_MEMORY")]
    in_memory: bool,

    /// Run every create and delete under one lock, closing the lost-update race
    #[arg(long, env = "BOOKINGS_SERIALIZE_WRITES")]
    serialize_writes: bool,

    /// Largest accepted request body in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 10 * 1024)]
    max_body_bytes: usize,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn data_file(&self) -> PathBuf {
        self.data_file.clone()
    }

    fn in_memory(&self) -> bool {
        self.in_memory
    }

    fn serialize_writes(&self) -> bool {
        self.serialize_writes
    }

    fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}
