// Copyright 2025 Cowboy AI, LLC.

//! Derived delivery snapshot and the status derivation engine
//!
//! `Delivery` is never edited field by field. It is the output of a pure
//! function over the route specification, the assigned itinerary and the
//! handling history, and is recomputed wholesale on every aggregate
//! mutation. The stored snapshot can therefore never drift from the facts
//! it was derived from.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::handling::{HandlingActivityType, HandlingEvent, HandlingHistory};
use crate::itinerary::Itinerary;
use crate::location::UnLocode;
use crate::route::RouteSpecification;
use crate::voyage::VoyageNumber;

/// Status of cargo routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RoutingStatus {
    /// No itinerary has been assigned yet
    NotRouted,
    /// The itinerary contradicts the specification or the handling history
    Misrouted,
    /// The assigned itinerary satisfies the route specification
    Routed,
}

impl fmt::Display for RoutingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotRouted => "Not routed",
            Self::Misrouted => "Misrouted",
            Self::Routed => "Routed",
        };
        write!(f, "{name}")
    }
}

/// Transport status of a cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TransportStatus {
    /// Not yet received at the origin terminal
    NotReceived,
    /// In a port, between voyages
    InPort,
    /// Aboard a carrier vessel
    OnboardCarrier,
    /// Claimed by the consignee
    Claimed,
    /// Undetermined until the next concrete handling event
    Unknown,
}

impl TransportStatus {
    /// Whether this status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Claimed)
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotReceived => "Not received",
            Self::InPort => "In port",
            Self::OnboardCarrier => "Onboard carrier",
            Self::Claimed => "Claimed",
            Self::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Point-in-time snapshot of a cargo's progress
///
/// Exclusively owned and replaced by the `Cargo` aggregate; callers read
/// it but never construct or mutate it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Delivery {
    /// Where the cargo is in the transport chain
    pub transport_status: TransportStatus,
    /// Location of the latest handling event, or the booked origin before
    /// any handling has been recorded
    pub last_known_location: UnLocode,
    /// Voyage the cargo is currently aboard, if any
    pub current_voyage: Option<VoyageNumber>,
    /// Whether any recorded handling contradicts the itinerary
    pub is_misdirected: bool,
    /// Status of the routing itself
    pub routing_status: RoutingStatus,
    /// Scheduled arrival per the assigned itinerary
    pub eta: Option<DateTime<Utc>>,
    /// Whether the latest event unloaded the cargo at its destination
    pub is_unloaded_at_destination: bool,
    /// When this snapshot was computed
    pub calculated_at: DateTime<Utc>,
}

impl Delivery {
    /// Derive a fresh snapshot from the route specification, the assigned
    /// itinerary and the full handling history
    ///
    /// Deterministic up to the `calculated_at` stamp: the same inputs
    /// always produce the same statuses, so deriving repeatedly and
    /// redundantly is safe. The full history is re-scanned every time,
    /// which keeps the misdirection flag monotonic as long as past events
    /// are never removed.
    pub fn derived_from(
        route_specification: &RouteSpecification,
        itinerary: &Itinerary,
        history: &HandlingHistory,
    ) -> Self {
        let last_event = history.most_recent_event();
        let is_misdirected = history.iter().any(|event| !itinerary.is_expected(event));

        Self {
            transport_status: transport_status_of(last_event),
            last_known_location: last_event
                .map(|event| event.location.clone())
                .unwrap_or_else(|| route_specification.origin.clone()),
            current_voyage: current_voyage_of(last_event),
            is_misdirected,
            routing_status: routing_status_of(is_misdirected, route_specification, itinerary),
            eta: itinerary.final_arrival_time(),
            is_unloaded_at_destination: unloaded_at_destination(last_event, route_specification),
            calculated_at: Utc::now(),
        }
    }

    /// Recompute the routing-dependent fields after the specification or
    /// the itinerary changed
    ///
    /// The handling-derived fields are carried forward unchanged,
    /// including the misdirection flag, which stays monotonic. The next
    /// full derivation with the handling history supersedes this snapshot
    /// as soon as new events are recorded.
    pub fn update_on_routing(
        &self,
        route_specification: &RouteSpecification,
        itinerary: &Itinerary,
    ) -> Self {
        Self {
            routing_status: routing_status_of(
                self.is_misdirected,
                route_specification,
                itinerary,
            ),
            eta: itinerary.final_arrival_time(),
            calculated_at: Utc::now(),
            ..self.clone()
        }
    }
}

fn transport_status_of(last_event: Option<&HandlingEvent>) -> TransportStatus {
    match last_event.map(|event| event.activity) {
        None => TransportStatus::NotReceived,
        Some(HandlingActivityType::Receive) | Some(HandlingActivityType::Unload) => {
            TransportStatus::InPort
        }
        Some(HandlingActivityType::Load) => TransportStatus::OnboardCarrier,
        Some(HandlingActivityType::Claim) => TransportStatus::Claimed,
        Some(HandlingActivityType::Customs) => TransportStatus::Unknown,
    }
}

fn current_voyage_of(last_event: Option<&HandlingEvent>) -> Option<VoyageNumber> {
    match last_event {
        Some(event) if event.activity == HandlingActivityType::Load => event.voyage.clone(),
        _ => None,
    }
}

// Misdirection takes precedence: an empty itinerary with recorded handling
// is Misrouted, not NotRouted.
fn routing_status_of(
    is_misdirected: bool,
    route_specification: &RouteSpecification,
    itinerary: &Itinerary,
) -> RoutingStatus {
    if is_misdirected {
        RoutingStatus::Misrouted
    } else if itinerary.is_empty() {
        RoutingStatus::NotRouted
    } else if route_specification.is_satisfied_by(itinerary) {
        RoutingStatus::Routed
    } else {
        RoutingStatus::Misrouted
    }
}

fn unloaded_at_destination(
    last_event: Option<&HandlingEvent>,
    route_specification: &RouteSpecification,
) -> bool {
    last_event.is_some_and(|event| {
        event.activity == HandlingActivityType::Unload
            && event.location == route_specification.destination
    })
}
