use std::{
    io,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use crate::{backend::BookingBackend, error::PersistenceError, types::Booking};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_load_all: AtomicU64,
    pub calls_to_save_all: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_load_all: AtomicU64::default(),
            calls_to_save_all: AtomicU64::default(),
            bookings: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    fn result(&self) -> Result<(), PersistenceError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(io::Error::new(io::ErrorKind::Other, "Supposed to fail").into()),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn load_all(&self) -> Result<Vec<Booking>, PersistenceError> {
        self.0.calls_to_load_all.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self.0.bookings.lock().unwrap().clone())
    }

    fn save_all(&self, bookings: &[Booking]) -> Result<(), PersistenceError> {
        self.0.calls_to_save_all.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        *self.0.bookings.lock().unwrap() = bookings.to_vec();
        Ok(())
    }
}
