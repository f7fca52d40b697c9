//! Records returned by the REST backend
//!
//! Relations come back embedded (a flight carries its aircraft and both
//! airports), so list screens can search nested fields such as
//! `aircraft.registrationNumber` without extra requests. Collections of
//! children are only present on detail responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Airline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<i64>,
    pub name: String,
    pub country: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Vec<Aircraft>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_members: Option<Vec<CrewMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Aircraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<AircraftModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
    pub registration_number: String,
    /// `YYYY-MM-DD`
    pub manufacture_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<Vec<Flight>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AircraftModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_class: Option<AircraftClass>,
    pub name: String,
    pub manufacturer: String,
    pub crew_size: i32,
    pub passenger_capacity: i32,
    pub operational_cost: f64,
    pub fuel_consumption: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Vec<Aircraft>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AircraftClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
    pub name: String,
    /// Flight range in kilometres
    pub range: f64,
    /// Minimum runway length in metres
    pub runway_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<AircraftModel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Airport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport_id: Option<i64>,
    pub name: String,
    pub city: String,
    pub country: String,
    pub service_cost: f64,
    pub parking_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departures: Option<Vec<Flight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrivals: Option<Vec<Flight>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Aircraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<Airport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<Airport>,
    pub departure_time: String,
    pub arrival_time: String,
    pub flight_hours: f64,
    pub ticket_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_assignments: Option<Vec<CrewAssignment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrewMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub hire_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<CrewAssignment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrewAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_member_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_member: Option<CrewMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<Flight>,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ticket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<Flight>,
    pub passenger_name: String,
    pub passenger_passport: String,
    pub seat_number: String,
    pub price: f64,
}

/// Roles offered by the crew assignment form
pub const CREW_ROLES: &[&str] = &[
    "Капитан",
    "Второй пилот",
    "Бортинженер",
    "Старший бортпроводник",
    "Бортпроводник",
    "Штурман",
    "Радист",
];
