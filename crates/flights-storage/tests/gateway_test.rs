//! Lookup behaviour of FlightGateway against an on-disk fixture database.

mod common;

use common::{expected, ids, Fixture};
use flights_core::errors::StorageError;
use flights_core::Value;
use flights_storage::{FlightGateway, FlightQuery};

const DELTA: &str = "Delta Air Lines Inc.";
const UNITED: &str = "United Air Lines Inc.";

fn gateway(fixture: &Fixture) -> FlightGateway {
    FlightGateway::new(&fixture.config()).unwrap()
}

// ---- flight_by_id ----

#[test]
fn flight_by_id_returns_the_matching_record() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);

    let records = gateway.flight_by_id(1);
    assert_eq!(records.len(), 1);
    let flight = &records[0];
    assert_eq!(flight.get("ID"), Some(&Value::Integer(1)));
    assert_eq!(flight.flight_id(), Some(1));
    assert_eq!(flight.origin_airport(), Some("LAX"));
    assert_eq!(flight.destination_airport(), Some("JFK"));
    assert_eq!(flight.airline_name(), Some(DELTA));
    // null delay stays null through both the native column and the alias
    assert_eq!(flight.get("DEPARTURE_DELAY"), Some(&Value::Null));
    assert_eq!(flight.get("DELAY"), Some(&Value::Null));
    assert_eq!(flight.delay(), None);
}

#[test]
fn flight_by_id_absent_is_empty() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert!(gateway.flight_by_id(999).is_empty());
    assert!(gateway.try_flight_by_id(-1).unwrap().is_empty());
}

#[test]
fn every_fixture_flight_is_found_by_id() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    for flight in common::FLIGHTS {
        let records = gateway.flight_by_id(flight.0);
        assert_eq!(ids(&records), vec![flight.0]);
        assert_eq!(records[0].delay(), flight.7);
    }
}

#[test]
fn records_carry_native_columns_and_aliases() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    let record = gateway.flight_by_id(2).remove(0);

    for column in [
        "ID",
        "YEAR",
        "MONTH",
        "DAY",
        "AIRLINE",
        "FLIGHT_NUMBER",
        "TAIL_NUMBER",
        "ORIGIN_AIRPORT",
        "DESTINATION_AIRPORT",
        "DEPARTURE_DELAY",
        "airline",
        "FLIGHT_ID",
        "DELAY",
    ] {
        assert!(record.contains(column), "missing column {column}");
    }
    // the native AIRLINE column is the foreign key, the alias is the name
    assert_eq!(record.get("AIRLINE"), Some(&Value::Integer(1)));
    assert_eq!(record.airline_name(), Some(UNITED));
    assert_eq!(record.get("TAIL_NUMBER"), Some(&Value::from("N200AA")));
    assert_eq!(record.delay(), Some(15));
}

// ---- flights_by_date ----

#[test]
fn flights_by_date_returns_exactly_that_day() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);

    for (day, month, year) in [(1, 1, 2015), (2, 1, 2015), (1, 2, 2015), (3, 1, 2015)] {
        let records = gateway.flights_by_date(day, month, year);
        assert_eq!(
            ids(&records),
            expected(|f| f.1 == year && f.2 == month && f.3 == day),
            "{day}/{month}/{year}"
        );
    }
}

#[test]
fn flights_by_date_day_and_month_are_not_swapped() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    // 1 February has only flight 6; 2 January has 4, 5, 8, 9
    assert_eq!(ids(&gateway.flights_by_date(1, 2, 2015)), vec![6]);
    assert_eq!(ids(&gateway.flights_by_date(2, 1, 2015)), vec![4, 5, 8, 9]);
}

// ---- delayed_flights_by_airport ----

#[test]
fn delayed_by_airport_applies_threshold_and_origin() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);

    let records = gateway.delayed_flights_by_airport("JFK");
    // 15 is below the threshold, 20 is on it, 25 is above, NULL never counts
    assert_eq!(ids(&records), vec![3, 4]);
    for record in &records {
        assert_eq!(record.origin_airport(), Some("JFK"));
        assert!(record.delay().unwrap() >= 20);
    }
}

#[test]
fn delayed_by_airport_matches_model_for_every_origin() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    for origin in ["JFK", "LAX", "ATL", "ORD", "SEA", "XXX"] {
        assert_eq!(
            ids(&gateway.delayed_flights_by_airport(origin)),
            expected(|f| f.5 == origin && f.7.is_some_and(|d| d >= 20)),
            "{origin}"
        );
    }
}

#[test]
fn delayed_by_airport_is_exact_match() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert!(gateway.delayed_flights_by_airport("jfk").is_empty());
}

// ---- delayed_flights_by_airline ----

#[test]
fn delayed_by_airline_applies_threshold_and_name() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);

    // Delta: 1 (null), 4 (20), 5 (0), 7 (null), 8 (-5), 9 (19)
    assert_eq!(ids(&gateway.delayed_flights_by_airline(DELTA)), vec![4]);
    // United: 2 (15), 6 (120)
    assert_eq!(ids(&gateway.delayed_flights_by_airline(UNITED)), vec![6]);
    for record in gateway.delayed_flights_by_airline(UNITED) {
        assert_eq!(record.airline_name(), Some(UNITED));
    }
}

#[test]
fn delayed_by_airline_requires_exact_name() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert!(gateway.delayed_flights_by_airline("delta air lines inc.").is_empty());
    assert!(gateway.delayed_flights_by_airline("Delta").is_empty());
}

#[test]
fn injection_attempts_are_plain_values() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert!(gateway
        .try_delayed_flights_by_airline("x' OR '1'='1")
        .unwrap()
        .is_empty());
    assert!(gateway
        .try_delayed_flights_by_airport("JFK'; DROP TABLE flights; --")
        .unwrap()
        .is_empty());
    assert_eq!(gateway.flight_by_id(1).len(), 1);
}

#[test]
fn real_delay_stays_present() {
    let fixture = Fixture::new();
    fixture
        .writer()
        .execute_batch("UPDATE flights SET DEPARTURE_DELAY = 25.5 WHERE ID = 3;")
        .unwrap();
    let gateway = gateway(&fixture);

    let records = gateway.delayed_flights_by_airport("JFK");
    assert_eq!(ids(&records), vec![3, 4]);
    assert_eq!(records[0].get("DELAY"), Some(&Value::Real(25.5)));
    assert_eq!(records[0].delay(), Some(25));
}

// ---- threshold configuration ----

#[test]
fn configured_threshold_changes_the_delay_filter() {
    let fixture = Fixture::new();
    let mut config = fixture.config();
    config.query.delay_threshold_minutes = Some(0);
    let gateway = FlightGateway::new(&config).unwrap();

    // zero delay now counts, negative and null still do not
    assert_eq!(ids(&gateway.delayed_flights_by_airline(DELTA)), vec![4, 5, 9]);
}

// ---- idempotence ----

#[test]
fn repeated_lookups_return_identical_results() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    let queries = [
        FlightQuery::by_id(3),
        FlightQuery::by_date(1, 1, 2015),
        FlightQuery::delayed_by_airport("JFK"),
        FlightQuery::delayed_by_airline(DELTA),
    ];
    for query in &queries {
        let first = gateway.try_lookup(query).unwrap();
        let second = gateway.try_lookup(query).unwrap();
        assert_eq!(first, second, "{query}");
    }
}

// ---- connection lifecycle ----

#[test]
fn connection_opens_lazily() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert!(!gateway.is_connected());
    gateway.flight_by_id(1);
    assert!(gateway.is_connected());
}

#[test]
fn missing_database_fails_soft_and_retries() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("later.sqlite3");
    let gateway = FlightGateway::new(&common::config_for(&path)).unwrap();

    assert!(matches!(
        gateway.connect(),
        Err(StorageError::ConnectionFailed { .. })
    ));
    assert!(gateway.flight_by_id(1).is_empty());
    assert!(matches!(
        gateway.try_flight_by_id(1),
        Err(StorageError::ConnectionFailed { .. })
    ));

    common::seed(&path);
    assert_eq!(ids(&gateway.flight_by_id(1)), vec![1]);
}

#[test]
fn double_close_is_a_noop() {
    let fixture = Fixture::new();
    let mut gateway = gateway(&fixture);
    gateway.connect().unwrap();

    gateway.close().unwrap();
    gateway.close().unwrap();
    assert!(gateway.is_closed());
    assert!(matches!(gateway.connect(), Err(StorageError::Closed)));
    assert!(matches!(gateway.try_flight_by_id(1), Err(StorageError::Closed)));
    assert!(gateway.flights_by_date(1, 1, 2015).is_empty());
}

#[test]
fn close_without_connecting_is_fine() {
    let fixture = Fixture::new();
    let mut gateway = gateway(&fixture);
    gateway.close().unwrap();
    assert!(gateway.is_closed());
}

// ---- fail-soft ----

#[test]
fn backend_failure_yields_empty_and_gateway_recovers() {
    let fixture = Fixture::new();
    let gateway = gateway(&fixture);
    assert_eq!(ids(&gateway.flight_by_id(3)), vec![3]);

    let writer = fixture.writer();
    writer
        .execute_batch("ALTER TABLE airlines RENAME TO airlines_old;")
        .unwrap();

    assert!(gateway.flight_by_id(3).is_empty());
    assert!(gateway.delayed_flights_by_airline(DELTA).is_empty());
    assert!(matches!(
        gateway.try_flight_by_id(3),
        Err(StorageError::SqliteError { .. })
    ));

    writer
        .execute_batch("ALTER TABLE airlines_old RENAME TO airlines;")
        .unwrap();

    assert_eq!(ids(&gateway.flight_by_id(3)), vec![3]);
    assert_eq!(ids(&gateway.delayed_flights_by_airline(DELTA)), vec![4]);
}

#[test]
fn schema_mismatch_fails_soft() {
    let fixture = Fixture::new();
    let mut config = fixture.config();
    config.schema.departure_delay = Some("ARRIVAL_DELAY".to_string());
    let gateway = FlightGateway::new(&config).unwrap();

    assert!(gateway.delayed_flights_by_airport("JFK").is_empty());
    assert!(gateway.try_delayed_flights_by_airport("JFK").is_err());
    // the connection itself is still usable
    assert!(gateway.is_connected());
}
