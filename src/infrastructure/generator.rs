//! Identifier Generation
//!
//! Infrastructure-backed id sources for the domain.

use crate::domain::entities::GuestIdGenerator;
use crate::domain::value_objects::GuestId;

/// GuestIdGenerator backed by random UUIDs.
#[derive(Debug, Default)]
pub struct UuidGuestIdGenerator;

impl UuidGuestIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl GuestIdGenerator for UuidGuestIdGenerator {
    fn generate(&self) -> GuestId {
        GuestId::generate()
    }
}
