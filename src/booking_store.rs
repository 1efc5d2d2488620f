use crate::{
    backend::BookingBackend,
    error::{BookingError, PersistenceError},
    types::{Booking, Slot},
};
use std::sync::Mutex;
use tracing::{info, warn};

/// Owns the booking collection. Holds no bookings itself: every call loads
/// the full collection from the backend and mutations write it back whole.
///
/// Without a write lock, two concurrent `create` calls may both pass the
/// conflict check against the same snapshot and the second save drops the
/// first booking. [`BookingStore::serialized`] runs each load, check and save
/// cycle under one process-wide lock instead.
#[derive(Debug)]
pub struct BookingStore<B: BookingBackend> {
    backend: B,
    write_lock: Option<Mutex<()>>,
}

impl<B: BookingBackend> BookingStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: None,
        }
    }

    pub fn serialized(backend: B) -> Self {
        Self {
            backend,
            write_lock: Some(Mutex::new(())),
        }
    }

    /// All bookings ordered by date, then start. Storage order is left untouched.
    pub fn list(&self) -> Result<Vec<Booking>, PersistenceError> {
        let mut bookings = self.backend.load_all()?;
        bookings.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.start_minutes.cmp(&b.start_minutes))
        });
        Ok(bookings)
    }

    pub fn create(&self, slot: Slot) -> Result<Booking, BookingError> {
        let _guard = self.lock_writes()?;

        let mut bookings = self.backend.load_all()?;
        if let Some(conflict) = bookings.iter().find(|booking| booking.overlaps(&slot)) {
            warn!(
                date = %slot.date,
                time = %slot.time,
                conflict = %conflict.id,
                "Requested slot overlaps an existing booking"
            );
            return Err(BookingError::Conflict(Box::new(conflict.clone())));
        }

        let booking = Booking::from_slot(slot);
        bookings.push(booking.clone());
        self.backend.save_all(&bookings)?;

        info!(id = %booking.id, date = %booking.date, time = %booking.time, "Booking created");
        Ok(booking)
    }

    /// Returns `false` when no booking carries `id`. The collection is only
    /// written back if something was removed.
    pub fn delete(&self, id: &str) -> Result<bool, PersistenceError> {
        let _guard = self.lock_writes()?;

        let mut bookings = self.backend.load_all()?;
        let count = bookings.len();
        bookings.retain(|booking| booking.id != id);
        if bookings.len() == count {
            return Ok(false);
        }

        self.backend.save_all(&bookings)?;
        info!(id, "Booking deleted");
        Ok(true)
    }

    fn lock_writes(&self) -> Result<Option<std::sync::MutexGuard<'_, ()>>, PersistenceError> {
        self.write_lock
            .as_ref()
            .map(|lock| lock.lock().map_err(|_| PersistenceError::Poisoned))
            .transpose()
    }
}
