// Copyright 2025 Cowboy AI, LLC.

use chrono::{DateTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shipping_domain::{
    Delivery, HandlingActivityType, HandlingEvent, HandlingHistory, Itinerary, Leg,
    RouteSpecification, UnLocode, VoyageNumber,
};

const LOCATIONS: [&str; 6] = ["USNYC", "SESTO", "CNHKG", "JPTYO", "DEHAM", "NLRTM"];

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

fn sample_itinerary() -> Itinerary {
    let legs = (0..LOCATIONS.len() - 1)
        .map(|i| {
            Leg::new(
                VoyageNumber::new(format!("V{:04}", i + 1)),
                UnLocode::new(LOCATIONS[i]),
                UnLocode::new(LOCATIONS[i + 1]),
                at(i as i64 * 86_400),
                at(i as i64 * 86_400 + 43_200),
            )
            .unwrap()
        })
        .collect();
    Itinerary::new(legs).unwrap()
}

fn sample_history(events: usize) -> HandlingHistory {
    let itinerary = sample_itinerary();
    let legs = itinerary.legs();
    let facts = (0..events)
        .map(|i| {
            let leg = &legs[i % legs.len()];
            if i % 2 == 0 {
                HandlingEvent::aboard(
                    HandlingActivityType::Load,
                    leg.voyage_number.clone(),
                    leg.load_location.clone(),
                    at(i as i64 * 3_600),
                    at(i as i64 * 3_600),
                )
            } else {
                HandlingEvent::aboard(
                    HandlingActivityType::Unload,
                    leg.voyage_number.clone(),
                    leg.unload_location.clone(),
                    at(i as i64 * 3_600),
                    at(i as i64 * 3_600),
                )
            }
        })
        .collect();
    HandlingHistory::from_events(facts)
}

fn benchmark_delivery_derivation(c: &mut Criterion) {
    let spec = RouteSpecification::new(
        UnLocode::new(LOCATIONS[0]),
        UnLocode::new(LOCATIONS[LOCATIONS.len() - 1]),
        at(10_000_000),
    );
    let itinerary = sample_itinerary();

    let mut group = c.benchmark_group("delivery_derivation");
    for events in [1usize, 10, 100, 1_000] {
        let history = sample_history(events);
        group.bench_with_input(
            BenchmarkId::from_parameter(events),
            &history,
            |b, history| {
                b.iter(|| {
                    black_box(Delivery::derived_from(
                        black_box(&spec),
                        black_box(&itinerary),
                        black_box(history),
                    ))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_delivery_derivation);
criterion_main!(benches);
