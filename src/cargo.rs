// Copyright 2025 Cowboy AI, LLC.

//! Cargo aggregate root
//!
//! All mutation goes through the aggregate, and every mutation replaces
//! the stored `Delivery` with a freshly derived snapshot. Callers never
//! set delivery fields directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delivery::Delivery;
use crate::handling::HandlingHistory;
use crate::itinerary::Itinerary;
use crate::location::UnLocode;
use crate::route::RouteSpecification;
use crate::tracking::TrackingId;

/// The cargo aggregate root
///
/// Binds the tracking identifier, the requested route, the assigned
/// itinerary and the derived delivery snapshot. One logical owner mutates
/// a given instance at a time; distinct instances are fully independent.
///
/// # Examples
///
/// ```rust
/// use shipping_domain::{Cargo, RouteSpecification, RoutingStatus, TrackingId, TransportStatus, UnLocode};
/// use chrono::{TimeZone, Utc};
///
/// let spec = RouteSpecification::new(
///     UnLocode::new("USNYC"),
///     UnLocode::new("NLRTM"),
///     Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
/// );
/// let cargo = Cargo::new(TrackingId::new("ABC123"), spec);
///
/// assert_eq!(cargo.delivery().routing_status, RoutingStatus::NotRouted);
/// assert_eq!(cargo.delivery().transport_status, TransportStatus::NotReceived);
/// assert_eq!(cargo.delivery().current_voyage, None);
/// assert_eq!(cargo.delivery().eta, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Cargo {
    tracking_id: TrackingId,
    origin: UnLocode,
    route_specification: RouteSpecification,
    itinerary: Itinerary,
    delivery: Delivery,
}

impl Cargo {
    /// Book a new cargo
    ///
    /// The origin is snapshotted from the initial route specification and
    /// never changes afterwards, even when the cargo is re-routed. The
    /// delivery is derived from an empty itinerary and empty history.
    pub fn new(tracking_id: TrackingId, route_specification: RouteSpecification) -> Self {
        let itinerary = Itinerary::empty();
        let history = HandlingHistory::new();
        let delivery = Delivery::derived_from(&route_specification, &itinerary, &history);

        debug!(
            tracking_id = %tracking_id,
            origin = %route_specification.origin,
            destination = %route_specification.destination,
            "cargo booked"
        );

        Self {
            tracking_id,
            origin: route_specification.origin.clone(),
            route_specification,
            itinerary,
            delivery,
        }
    }

    /// The immutable tracking identifier
    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    /// Origin of the initial booking
    pub fn origin(&self) -> &UnLocode {
        &self.origin
    }

    /// The current route specification
    pub fn route_specification(&self) -> &RouteSpecification {
        &self.route_specification
    }

    /// The currently assigned itinerary
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// The derived delivery snapshot
    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Replace the route specification
    ///
    /// The delivery is re-derived against the existing itinerary. When
    /// that itinerary no longer satisfies the new specification the cargo
    /// becomes Misrouted immediately; that is an expected state, not an
    /// error.
    pub fn specify_new_route(&mut self, route_specification: RouteSpecification) {
        self.route_specification = route_specification;
        self.delivery = self
            .delivery
            .update_on_routing(&self.route_specification, &self.itinerary);

        debug!(
            tracking_id = %self.tracking_id,
            routing_status = %self.delivery.routing_status,
            "new route specified"
        );
    }

    /// Assign the cargo to a physical route
    ///
    /// Continuity of the legs was already enforced when the `Itinerary`
    /// was constructed at the boundary.
    pub fn assign_to_route(&mut self, itinerary: Itinerary) {
        self.itinerary = itinerary;
        self.delivery = self
            .delivery
            .update_on_routing(&self.route_specification, &self.itinerary);

        debug!(
            tracking_id = %self.tracking_id,
            routing_status = %self.delivery.routing_status,
            "cargo assigned to route"
        );
    }

    /// Re-derive the delivery snapshot from newly recorded handling history
    pub fn derive_delivery_progress(&mut self, history: &HandlingHistory) {
        self.delivery =
            Delivery::derived_from(&self.route_specification, &self.itinerary, history);

        debug!(
            tracking_id = %self.tracking_id,
            transport_status = %self.delivery.transport_status,
            routing_status = %self.delivery.routing_status,
            "delivery progress derived"
        );
    }
}
