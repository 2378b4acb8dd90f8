//! Guest Repository Implementation
//!
//! In-memory implementation of the GuestRepository trait.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{Guest, GuestRepository};
use crate::domain::value_objects::GuestId;
use crate::shared::error::StoreError;

/// In-memory guest repository, indexed by guest id.
#[derive(Debug, Default)]
pub struct InMemoryGuestRepository {
    rows: DashMap<String, Guest>,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored guest by id.
    pub fn find(&self, id: &GuestId) -> Option<Guest> {
        self.rows.get(id.as_str()).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    /// Insert or replace the guest's row.
    async fn save(&self, guest: &Guest) -> Result<(), StoreError> {
        self.rows
            .insert(guest.id().as_str().to_string(), guest.clone());
        Ok(())
    }
}
