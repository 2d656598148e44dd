// Copyright 2025 Cowboy AI, LLC.

//! Property tests for the delivery derivation engine
//!
//! Derivation must be a total function: any continuity-valid itinerary
//! combined with any handling history derives a delivery, even when the
//! result is Misrouted or NotRouted. It must also be deterministic and
//! keep the misdirection flag monotonic under appended history.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use shipping_domain::{
    Delivery, HandlingActivityType, HandlingEvent, HandlingHistory, Itinerary, Leg,
    RouteSpecification, RoutingStatus, TransportStatus, UnLocode, VoyageNumber,
};

const LOCATIONS: [&str; 6] = ["USNYC", "SESTO", "CNHKG", "JPTYO", "DEHAM", "NLRTM"];
const VOYAGES: [&str; 4] = ["V0100", "V0200", "V0300", "V0400"];

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

/// Chain legs through the location pool so continuity holds by construction
fn chained_itinerary(leg_count: usize) -> Itinerary {
    let legs = (0..leg_count)
        .map(|i| {
            Leg::new(
                VoyageNumber::new(VOYAGES[i % VOYAGES.len()]),
                UnLocode::new(LOCATIONS[i]),
                UnLocode::new(LOCATIONS[i + 1]),
                at(i as i64 * 86_400),
                at(i as i64 * 86_400 + 43_200),
            )
            .expect("pool locations are distinct")
        })
        .collect();
    Itinerary::new(legs).expect("pool legs are continuous")
}

fn activity_strategy() -> impl Strategy<Value = HandlingActivityType> {
    prop_oneof![
        Just(HandlingActivityType::Receive),
        Just(HandlingActivityType::Load),
        Just(HandlingActivityType::Unload),
        Just(HandlingActivityType::Claim),
        Just(HandlingActivityType::Customs),
    ]
}

fn event_strategy() -> impl Strategy<Value = HandlingEvent> {
    (
        activity_strategy(),
        0..LOCATIONS.len(),
        0..VOYAGES.len(),
        0i64..1_000_000,
    )
        .prop_map(|(activity, location, voyage, seconds)| HandlingEvent {
            activity,
            location: UnLocode::new(LOCATIONS[location]),
            voyage: activity
                .involves_voyage()
                .then(|| VoyageNumber::new(VOYAGES[voyage])),
            completed_at: at(seconds),
            registered_at: at(seconds),
        })
}

fn history_strategy() -> impl Strategy<Value = HandlingHistory> {
    prop::collection::vec(event_strategy(), 0..12).prop_map(HandlingHistory::from_events)
}

proptest! {
    #[test]
    fn derivation_is_total(
        leg_count in 0usize..=4,
        origin in 0..LOCATIONS.len(),
        destination in 0..LOCATIONS.len(),
        history in history_strategy(),
    ) {
        let spec = RouteSpecification::new(
            UnLocode::new(LOCATIONS[origin]),
            UnLocode::new(LOCATIONS[destination]),
            at(2_000_000),
        );
        let itinerary = chained_itinerary(leg_count);

        let delivery = Delivery::derived_from(&spec, &itinerary, &history);

        // An ETA exists exactly when the cargo is routed somewhere
        prop_assert_eq!(delivery.eta.is_none(), itinerary.is_empty());

        if history.is_empty() {
            prop_assert_eq!(delivery.transport_status, TransportStatus::NotReceived);
            prop_assert!(!delivery.is_misdirected);
            prop_assert_eq!(&delivery.last_known_location, &spec.origin);
        }

        // NotRouted only ever describes an empty, unhandled booking
        if delivery.routing_status == RoutingStatus::NotRouted {
            prop_assert!(itinerary.is_empty());
            prop_assert!(!delivery.is_misdirected);
        }

        // A cargo on no voyage cannot be onboard a carrier
        if delivery.current_voyage.is_some() {
            prop_assert_eq!(delivery.transport_status, TransportStatus::OnboardCarrier);
        }
    }

    #[test]
    fn derivation_is_idempotent(
        leg_count in 0usize..=4,
        origin in 0..LOCATIONS.len(),
        destination in 0..LOCATIONS.len(),
        history in history_strategy(),
    ) {
        let spec = RouteSpecification::new(
            UnLocode::new(LOCATIONS[origin]),
            UnLocode::new(LOCATIONS[destination]),
            at(2_000_000),
        );
        let itinerary = chained_itinerary(leg_count);

        let first = Delivery::derived_from(&spec, &itinerary, &history);
        let second = Delivery::derived_from(&spec, &itinerary, &history);

        prop_assert_eq!(first.transport_status, second.transport_status);
        prop_assert_eq!(&first.last_known_location, &second.last_known_location);
        prop_assert_eq!(&first.current_voyage, &second.current_voyage);
        prop_assert_eq!(first.is_misdirected, second.is_misdirected);
        prop_assert_eq!(first.routing_status, second.routing_status);
        prop_assert_eq!(first.eta, second.eta);
        prop_assert_eq!(first.is_unloaded_at_destination, second.is_unloaded_at_destination);
    }

    #[test]
    fn misdirection_is_monotonic_under_append(
        leg_count in 0usize..=4,
        history in history_strategy(),
        appended in prop::collection::vec(event_strategy(), 1..6),
    ) {
        let spec = RouteSpecification::new(
            UnLocode::new(LOCATIONS[0]),
            UnLocode::new(LOCATIONS[leg_count.max(1)]),
            at(2_000_000),
        );
        let itinerary = chained_itinerary(leg_count);

        let before = Delivery::derived_from(&spec, &itinerary, &history);
        if before.is_misdirected {
            let mut extended = history.clone();
            for event in appended {
                extended.append(event);
            }
            let after = Delivery::derived_from(&spec, &itinerary, &extended);

            prop_assert!(after.is_misdirected);
            prop_assert_eq!(after.routing_status, RoutingStatus::Misrouted);
        }
    }
}
