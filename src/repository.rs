// Copyright 2025 Cowboy AI, LLC.

//! Repository contract for cargo aggregates

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::cargo::Cargo;
use crate::errors::{DomainError, DomainResult};
use crate::tracking::TrackingId;

/// Storage contract consumed by the application layer
///
/// The domain core never calls this itself; aggregates are loaded, handed
/// to a use case, and stored back by an outer layer. Serializing access
/// to one aggregate across writers is this layer's responsibility.
pub trait CargoRepository: Send + Sync {
    /// Store a cargo aggregate
    fn store(&self, cargo: Cargo) -> DomainResult<()>;

    /// Find a cargo by tracking identifier
    fn find(&self, tracking_id: &TrackingId) -> DomainResult<Cargo>;

    /// All stored cargos, in no particular order
    fn find_all(&self) -> Vec<Cargo>;
}

/// In-memory repository for tests and demos
#[derive(Debug, Clone, Default)]
pub struct InMemoryCargoRepository {
    storage: Arc<RwLock<HashMap<TrackingId, Cargo>>>,
}

impl InMemoryCargoRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl CargoRepository for InMemoryCargoRepository {
    fn store(&self, cargo: Cargo) -> DomainResult<()> {
        self.storage
            .write()
            .unwrap()
            .insert(cargo.tracking_id().clone(), cargo);
        Ok(())
    }

    fn find(&self, tracking_id: &TrackingId) -> DomainResult<Cargo> {
        self.storage
            .read()
            .unwrap()
            .get(tracking_id)
            .cloned()
            .ok_or_else(|| DomainError::UnknownCargo {
                tracking_id: tracking_id.to_string(),
            })
    }

    fn find_all(&self) -> Vec<Cargo> {
        self.storage.read().unwrap().values().cloned().collect()
    }
}
