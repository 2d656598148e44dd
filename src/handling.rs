// Copyright 2025 Cowboy AI, LLC.

//! Handling events and the per-cargo handling history
//!
//! A handling event is an immutable fact about something that physically
//! happened to a cargo. The history collects those facts for one cargo and
//! answers which of them is the most recent; everything else about a
//! cargo's progress is derived from it, never stored alongside it.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::location::UnLocode;
use crate::voyage::VoyageNumber;

/// Kind of physical handling a cargo can undergo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HandlingActivityType {
    /// Cargo received at a terminal
    Receive,
    /// Cargo loaded onto a voyage
    Load,
    /// Cargo unloaded from a voyage
    Unload,
    /// Cargo claimed by the consignee
    Claim,
    /// Cargo passed through customs inspection
    Customs,
}

impl HandlingActivityType {
    /// Whether events of this kind reference a voyage
    pub fn involves_voyage(&self) -> bool {
        matches!(self, Self::Load | Self::Unload)
    }
}

impl fmt::Display for HandlingActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Receive => "Receive",
            Self::Load => "Load",
            Self::Unload => "Unload",
            Self::Claim => "Claim",
            Self::Customs => "Customs",
        };
        write!(f, "{name}")
    }
}

/// A single immutable handling fact recorded for a cargo
///
/// Ordering for status derivation uses the completion time; the
/// registration time only breaks ties. Registration is allowed to lag or
/// even precede completion, since events can be reported late.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HandlingEvent {
    /// What happened
    pub activity: HandlingActivityType,
    /// Where it happened
    pub location: UnLocode,
    /// Voyage involved; present for load and unload activities
    pub voyage: Option<VoyageNumber>,
    /// When the handling physically took place
    pub completed_at: DateTime<Utc>,
    /// When the event was registered with the system
    pub registered_at: DateTime<Utc>,
}

impl HandlingEvent {
    /// Record a handling fact that happened in port, with no voyage involved
    pub fn in_port(
        activity: HandlingActivityType,
        location: UnLocode,
        completed_at: DateTime<Utc>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            activity,
            location,
            voyage: None,
            completed_at,
            registered_at,
        }
    }

    /// Record a load or unload aboard the given voyage
    pub fn aboard(
        activity: HandlingActivityType,
        voyage: VoyageNumber,
        location: UnLocode,
        completed_at: DateTime<Utc>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            activity,
            location,
            voyage: Some(voyage),
            completed_at,
            registered_at,
        }
    }
}

/// Ordered collection of handling events for exactly one cargo
///
/// Append-only from the domain's perspective: past events are facts and
/// are never removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HandlingHistory {
    events: Vec<HandlingEvent>,
}

impl HandlingHistory {
    /// An empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from already-recorded events, kept in insertion order
    pub fn from_events(events: Vec<HandlingEvent>) -> Self {
        Self { events }
    }

    /// Append a newly registered event
    pub fn append(&mut self, event: HandlingEvent) {
        self.events.push(event);
    }

    /// Whether no events have been recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Iterate over the events in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &HandlingEvent> {
        self.events.iter()
    }

    /// The event with the greatest completion time
    ///
    /// Ties are broken by registration time, then by insertion order with
    /// the later insertion winning.
    pub fn most_recent_event(&self) -> Option<&HandlingEvent> {
        self.events
            .iter()
            .max_by_key(|event| (event.completed_at, event.registered_at))
    }
}
