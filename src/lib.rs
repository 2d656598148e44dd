// Copyright 2025 Cowboy AI, LLC.

//! # Shipping Domain
//!
//! Cargo shipment tracking domain model for a logistics booking application.
//!
//! This crate provides the delivery-status derivation core and its
//! surrounding building blocks:
//! - **Value Objects**: location codes, voyage numbers, tracking identifiers
//! - **Handling Events**: immutable facts about what physically happened
//! - **Itinerary**: the planned physical route, continuity-validated
//! - **Route Specification**: the business request an itinerary must satisfy
//! - **Delivery**: the derived snapshot of routing and transport status
//! - **Cargo**: the aggregate root binding the above
//!
//! ## Design Principles
//!
//! 1. **Derivation over mutation**: `Delivery` is the output of a pure
//!    function over the specification, itinerary and handling history,
//!    recomputed wholesale on every aggregate mutation
//! 2. **States are data, not errors**: unrouted, misrouted and unknown
//!    states are enum values; derivation itself never fails
//! 3. **Closed status types**: routing and transport statuses are tagged
//!    enumerations, so invalid states are unrepresentable
//! 4. **Opaque collaborators**: location codes and tracking identifiers
//!    carry no internal structure the domain relies on

#![warn(missing_docs)]

mod cargo;
mod delivery;
mod errors;
mod handling;
mod itinerary;
mod location;
mod repository;
mod route;
mod tracking;
mod voyage;

pub use cargo::Cargo;
pub use delivery::{Delivery, RoutingStatus, TransportStatus};
pub use errors::{DomainError, DomainResult};
pub use handling::{HandlingActivityType, HandlingEvent, HandlingHistory};
pub use itinerary::{Itinerary, Leg};
pub use location::UnLocode;
pub use repository::{CargoRepository, InMemoryCargoRepository};
pub use route::RouteSpecification;
pub use tracking::{
    SequenceTrackingIdGenerator, TrackingId, TrackingIdGenerator, UuidTrackingIdGenerator,
};
pub use voyage::VoyageNumber;
