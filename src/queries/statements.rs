//! SQL text of the report queries
//!
//! Every statement takes the same four parameters:
//!
//! | param | type     | meaning                                 |
//! |-------|----------|-----------------------------------------|
//! | `$1`  | `date`   | first departure day, inclusive          |
//! | `$2`  | `date`   | last departure day, inclusive           |
//! | `$3`  | `bigint` | airline id                              |
//! | `$4`  | `bigint` | airport id (departure or arrival)       |
//!
//! A `NULL` parameter disables its filter. All four are referenced in every
//! statement so PostgreSQL can infer their types when preparing.
//! `crew_assigment` is the table's actual name.
//!
//! Statements carry no `ORDER BY`: rows are ordered by the query that wraps
//! them, on one of the output columns below.

/// Latest departures first
pub const BY_DEPARTURE: &str = "departure_time DESC";

/// Busiest first
pub const BY_TOTAL_FLIGHTS: &str = "total_flights DESC";

pub const FLIGHTS: &str = r#"
SELECT
    f.flight_id,
    f.departure_time,
    f.arrival_time,
    f.ticket_price,
    a.registration_number,
    am.name AS aircraft_model,
    am.manufacturer,
    al.name AS airline_name,
    al.country AS airline_country,
    dep.name AS departure_airport,
    dep.city AS departure_city,
    arr.name AS arrival_airport,
    arr.city AS arrival_city
FROM flight f
INNER JOIN aircraft a ON f.aircraft_id = a.aircraft_id
INNER JOIN aircraft_model am ON a.model_id = am.model_id
INNER JOIN airlines al ON a.airline_id = al.airline_id
INNER JOIN airport dep ON f.departure_airport = dep.airport_id
INNER JOIN airport arr ON f.arrival_airport = arr.airport_id
WHERE ($1::date IS NULL OR f.departure_time >= $1::date)
  AND ($2::date IS NULL OR f.departure_time < $2::date + 1)
  AND ($3::bigint IS NULL OR al.airline_id = $3::bigint)
  AND ($4::bigint IS NULL OR dep.airport_id = $4::bigint OR arr.airport_id = $4::bigint)
"#;

pub const CREW: &str = r#"
SELECT
    cm.first_name,
    cm.last_name,
    cm.qualification,
    ca.role,
    f.flight_id,
    f.departure_time,
    f.arrival_time,
    a.registration_number,
    al.name AS airline_name,
    dep.city AS departure_city,
    arr.city AS arrival_city
FROM crew_member cm
INNER JOIN crew_assigment ca ON cm.crew_id = ca.crew_member_id
INNER JOIN flight f ON ca.flight_id = f.flight_id
INNER JOIN aircraft a ON f.aircraft_id = a.aircraft_id
INNER JOIN airlines al ON cm.airline_id = al.airline_id
INNER JOIN airport dep ON f.departure_airport = dep.airport_id
INNER JOIN airport arr ON f.arrival_airport = arr.airport_id
WHERE ($1::date IS NULL OR f.departure_time >= $1::date)
  AND ($2::date IS NULL OR f.departure_time < $2::date + 1)
  AND ($3::bigint IS NULL OR cm.airline_id = $3::bigint)
  AND ($4::bigint IS NULL OR dep.airport_id = $4::bigint OR arr.airport_id = $4::bigint)
"#;

pub const AIRLINES: &str = r#"
SELECT
    al.name AS airline_name,
    al.country,
    COUNT(DISTINCT a.aircraft_id) AS total_aircraft,
    COUNT(DISTINCT f.flight_id) AS total_flights,
    AVG(f.ticket_price) AS avg_ticket_price,
    SUM(am.passenger_capacity) AS total_passenger_capacity
FROM airlines al
INNER JOIN aircraft a ON al.airline_id = a.airline_id
INNER JOIN aircraft_model am ON a.model_id = am.model_id
LEFT JOIN flight f ON a.aircraft_id = f.aircraft_id
    AND ($1::date IS NULL OR f.departure_time >= $1::date)
    AND ($2::date IS NULL OR f.departure_time < $2::date + 1)
    AND ($4::bigint IS NULL OR f.departure_airport = $4::bigint OR f.arrival_airport = $4::bigint)
WHERE ($3::bigint IS NULL OR al.airline_id = $3::bigint)
GROUP BY al.airline_id, al.name, al.country
"#;

pub const AIRPORTS: &str = r#"
SELECT
    ap.name AS airport_name,
    ap.city,
    ap.country,
    COUNT(DISTINCT dep_flights.flight_id) AS departures_count,
    COUNT(DISTINCT arr_flights.flight_id) AS arrivals_count,
    COUNT(DISTINCT dep_flights.flight_id) + COUNT(DISTINCT arr_flights.flight_id) AS total_flights,
    AVG(dep_flights.ticket_price) AS avg_departure_price,
    COUNT(DISTINCT a.airline_id) AS airlines_served
FROM airport ap
LEFT JOIN flight dep_flights ON ap.airport_id = dep_flights.departure_airport
    AND ($1::date IS NULL OR dep_flights.departure_time >= $1::date)
    AND ($2::date IS NULL OR dep_flights.departure_time < $2::date + 1)
    AND ($3::bigint IS NULL OR dep_flights.aircraft_id IN
        (SELECT aircraft_id FROM aircraft WHERE airline_id = $3::bigint))
LEFT JOIN flight arr_flights ON ap.airport_id = arr_flights.arrival_airport
    AND ($1::date IS NULL OR arr_flights.departure_time >= $1::date)
    AND ($2::date IS NULL OR arr_flights.departure_time < $2::date + 1)
    AND ($3::bigint IS NULL OR arr_flights.aircraft_id IN
        (SELECT aircraft_id FROM aircraft WHERE airline_id = $3::bigint))
LEFT JOIN aircraft a ON (dep_flights.aircraft_id = a.aircraft_id OR arr_flights.aircraft_id = a.aircraft_id)
WHERE ($4::bigint IS NULL OR ap.airport_id = $4::bigint)
GROUP BY ap.airport_id, ap.name, ap.city, ap.country
"#;

pub const TICKETS: &str = r#"
SELECT
    t.ticket_id,
    t.passenger_name,
    t.passenger_passport,
    t.seat_number,
    t.price,
    f.flight_id,
    f.departure_time,
    f.arrival_time,
    dep.name AS departure_airport,
    dep.city AS departure_city,
    arr.name AS arrival_airport,
    arr.city AS arrival_city,
    a.registration_number,
    am.name AS aircraft_model,
    al.name AS airline_name
FROM ticket t
INNER JOIN flight f ON t.flight_id = f.flight_id
INNER JOIN aircraft a ON f.aircraft_id = a.aircraft_id
INNER JOIN aircraft_model am ON a.model_id = am.model_id
INNER JOIN airlines al ON a.airline_id = al.airline_id
INNER JOIN airport dep ON f.departure_airport = dep.airport_id
INNER JOIN airport arr ON f.arrival_airport = arr.airport_id
WHERE ($1::date IS NULL OR f.departure_time >= $1::date)
  AND ($2::date IS NULL OR f.departure_time < $2::date + 1)
  AND ($3::bigint IS NULL OR al.airline_id = $3::bigint)
  AND ($4::bigint IS NULL OR dep.airport_id = $4::bigint OR arr.airport_id = $4::bigint)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 5] = [FLIGHTS, CREW, AIRLINES, AIRPORTS, TICKETS];

    #[test]
    fn test_every_statement_references_all_parameters() {
        for statement in ALL {
            for param in ["$1::date", "$2::date", "$3::bigint", "$4::bigint"] {
                assert!(statement.contains(param), "missing {param} in:\n{statement}");
            }
            assert!(!statement.contains("$5"));
        }
    }

    #[test]
    fn test_statements_are_single_selects() {
        for statement in ALL {
            assert!(statement.trim_start().starts_with("SELECT"));
            assert!(!statement.contains(';'));
            assert!(!statement.contains("ORDER BY"));
        }
    }

    #[test]
    fn test_order_columns_are_selected() {
        for statement in [FLIGHTS, CREW, TICKETS] {
            assert!(statement.contains("f.departure_time,"));
        }
        for statement in [AIRLINES, AIRPORTS] {
            assert!(statement.contains("AS total_flights"));
        }
    }
}
