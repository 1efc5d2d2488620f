use crate::{error::PersistenceError, types::Booking};

/// Storage for the whole booking collection. Both calls operate on the
/// collection as one unit, there are no partial updates.
pub trait BookingBackend: Send + Sync + 'static {
    fn load_all(&self) -> Result<Vec<Booking>, PersistenceError>;
    fn save_all(&self, bookings: &[Booking]) -> Result<(), PersistenceError>;
}
