use crate::{backend::BookingBackend, error::PersistenceError, types::Booking};
use std::sync::{Arc, Mutex};

/// Non-persistent backend. Bookings are gone once the process exits.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<Vec<Booking>>>,
}

impl BookingBackend for LocalBookings {
    fn load_all(&self) -> Result<Vec<Booking>, PersistenceError> {
        let bookings = self
            .bookings
            .lock()
            .map_err(|_| PersistenceError::Poisoned)?;
        Ok(bookings.clone())
    }

    fn save_all(&self, bookings: &[Booking]) -> Result<(), PersistenceError> {
        let mut stored = self
            .bookings
            .lock()
            .map_err(|_| PersistenceError::Poisoned)?;
        *stored = bookings.to_vec();
        Ok(())
    }
}
