use crate::types::Booking;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date, time, or duration.")]
    Invalid,
    #[error("Meeting cannot cross midnight.")]
    CrossesMidnight,
}

/// Failure of the storage underneath the booking collection. Never retried here.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode bookings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Stored booking at index {index} is malformed: {source}")]
    Malformed {
        index: usize,
        source: serde_json::Error,
    },
    #[error("Booking storage lock is poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Time slot overlaps an existing booking.")]
    Conflict(Box<Booking>),
    #[error("Booking not found.")]
    NotFound(String),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
