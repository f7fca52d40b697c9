//! Search and report endpoints of the backend
//!
//! Query parameters are URL-encoded by reqwest; optional filters are only
//! sent when set.

use super::ApiClient;
use crate::core::error::ApiError;
use crate::entities::{Airline, Airport, CrewAssignment, CrewMember, Flight, Ticket};
use serde_json::Value;

/// Filters of the flight search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSearch {
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    /// `YYYY-MM-DD`
    pub departure_date: Option<String>,
}

impl FlightSearch {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        optional_params([
            ("departureAirport", self.departure_airport.as_deref()),
            ("arrivalAirport", self.arrival_airport.as_deref()),
            ("departureDate", self.departure_date.as_deref()),
        ])
    }
}

/// Keep the filters that are set and not blank
fn optional_params<const N: usize>(
    params: [(&'static str, Option<&str>); N],
) -> Vec<(&'static str, String)> {
    params
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v.to_string()))
        })
        .collect()
}

impl ApiClient {
    /// Airlines filtered by country and fleet passenger capacity
    pub async fn search_airlines(
        &self,
        country: &str,
        capacity: i64,
    ) -> Result<Vec<Airline>, ApiError> {
        let query = [
            ("country", country.to_string()),
            ("capacity", capacity.to_string()),
        ];
        self.get_json("airlines/search", &query).await
    }

    pub async fn search_airports(
        &self,
        city: Option<&str>,
        country: Option<&str>,
    ) -> Result<Vec<Airport>, ApiError> {
        let query = optional_params([("city", city), ("country", country)]);
        self.get_json("airports/search", &query).await
    }

    pub async fn search_flights(&self, search: &FlightSearch) -> Result<Vec<Flight>, ApiError> {
        self.get_json("flights/search", &search.to_query()).await
    }

    /// Report rows of flights that left late
    pub async fn delayed_flights(&self) -> Result<Vec<Value>, ApiError> {
        self.get_json("flights/delayed", &[]).await
    }

    /// Report rows of flight counts per airport within a date range
    pub async fn airport_flight_counts(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Value>, ApiError> {
        let query = [
            ("startDate", start_date.to_string()),
            ("endDate", end_date.to_string()),
        ];
        self.get_json("flights/airports", &query).await
    }

    /// Crew members qualified for an aircraft class
    pub async fn crew_by_aircraft_class(
        &self,
        class_name: &str,
    ) -> Result<Vec<CrewMember>, ApiError> {
        let query = [("className", class_name.to_string())];
        self.get_json("crew-members/search", &query).await
    }

    pub async fn crew_by_airline(&self, airline_id: i64) -> Result<Vec<CrewMember>, ApiError> {
        self.get_json(&format!("crew-members/airline/{}", airline_id), &[])
            .await
    }

    pub async fn assignments_by_flight(
        &self,
        flight_id: i64,
    ) -> Result<Vec<CrewAssignment>, ApiError> {
        self.get_json(&format!("crew-assignments/flight/{}", flight_id), &[])
            .await
    }

    pub async fn assignments_by_crew_member(
        &self,
        crew_member_id: i64,
    ) -> Result<Vec<CrewAssignment>, ApiError> {
        self.get_json(&format!("crew-assignments/crew-member/{}", crew_member_id), &[])
            .await
    }

    /// Tickets filtered by departure airport name and price
    pub async fn tickets_by_airport_and_price(
        &self,
        airport_name: &str,
        price: f64,
    ) -> Result<Vec<Ticket>, ApiError> {
        let query = [
            ("airportName", airport_name.to_string()),
            ("price", price.to_string()),
        ];
        self.get_json("tickets/search", &query).await
    }
}
