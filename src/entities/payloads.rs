//! Create and update payloads
//!
//! Resources with relations are written with flat ids (`airlineId`,
//! `modelId`, ...) instead of the embedded records the backend returns.
//! Airlines, airports and aircraft classes post their own shape.

use super::models::{
    Aircraft, AircraftClass, AircraftModel, Airline, Airport, CrewAssignment, CrewMember, Flight,
    Ticket,
};
use crate::core::field::FieldFormat;
use crate::core::validation::validators::{date_format, format, instant, positive, required};
use crate::core::validation::{PayloadRules, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AircraftCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_id: Option<i64>,
    pub registration_number: String,
    pub manufacture_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<i64>,
    pub aircraft_id: Option<i64>,
    pub departure_airport_id: Option<i64>,
    pub arrival_airport_id: Option<i64>,
    pub departure_time: String,
    pub arrival_time: String,
    pub flight_hours: f64,
    pub ticket_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrewMemberCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub hire_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AircraftModelCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    pub class_id: Option<i64>,
    pub name: String,
    pub manufacturer: String,
    pub crew_size: i32,
    pub passenger_capacity: i32,
    pub operational_cost: f64,
    pub fuel_consumption: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrewAssignmentCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i64>,
    pub crew_member_id: Option<i64>,
    pub flight_id: Option<i64>,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    pub flight_id: Option<i64>,
    pub passenger_name: String,
    pub passenger_passport: String,
    pub seat_number: String,
    pub price: f64,
}

// =============================================================================
// Validation rules
// =============================================================================

impl Validate for Airline {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("name", required())
            .field("country", required())
            .field("contactEmail", required())
            .field("contactEmail", format(FieldFormat::Email))
            .field("contactPhone", format(FieldFormat::Phone))
    }
}

impl Validate for AircraftClass {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("name", required())
            .field("range", positive())
            .field("runwayLength", positive())
    }
}

impl Validate for Airport {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("name", required())
            .field("city", required())
            .field("country", required())
    }
}

impl Validate for AircraftCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("registrationNumber", required())
            .field("manufactureDate", required())
            .field("manufactureDate", date_format("%Y-%m-%d"))
    }
}

impl Validate for FlightCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("aircraftId", required())
            .field("departureAirportId", required())
            .field("arrivalAirportId", required())
            .field("departureTime", required())
            .field("departureTime", instant())
            .field("arrivalTime", required())
            .field("arrivalTime", instant())
            .field("flightHours", positive())
            .field("ticketPrice", positive())
    }
}

impl Validate for CrewMemberCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("firstName", required())
            .field("lastName", required())
            .field("hireDate", required())
            .field("hireDate", date_format("%Y-%m-%d"))
            .field("salary", positive())
    }
}

impl Validate for AircraftModelCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("classId", required())
            .field("name", required())
            .field("manufacturer", required())
            .field("crewSize", positive())
            .field("passengerCapacity", positive())
            .field("operationalCost", positive())
            .field("fuelConsumption", positive())
    }
}

impl Validate for CrewAssignmentCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("crewMemberId", required())
            .field("flightId", required())
    }
}

impl Validate for TicketCreateRequest {
    fn rules() -> PayloadRules {
        PayloadRules::new()
            .field("flightId", required())
            .field("passengerName", required())
            .field("passengerPassport", required())
            .field("seatNumber", required())
            .field("price", positive())
    }
}

// =============================================================================
// Edit-form prefill and local materialization
// =============================================================================

impl Airline {
    pub(crate) fn to_request(&self) -> Airline {
        Airline {
            aircraft: None,
            crew_members: None,
            ..self.clone()
        }
    }

    pub(crate) fn from_request(id: i64, request: &Airline) -> Self {
        Airline {
            airline_id: Some(id),
            ..request.to_request()
        }
    }
}

impl AircraftClass {
    pub(crate) fn to_request(&self) -> AircraftClass {
        AircraftClass {
            models: None,
            ..self.clone()
        }
    }

    pub(crate) fn from_request(id: i64, request: &AircraftClass) -> Self {
        AircraftClass {
            class_id: Some(id),
            ..request.to_request()
        }
    }
}

impl Airport {
    pub(crate) fn to_request(&self) -> Airport {
        Airport {
            departures: None,
            arrivals: None,
            ..self.clone()
        }
    }

    pub(crate) fn from_request(id: i64, request: &Airport) -> Self {
        Airport {
            airport_id: Some(id),
            ..request.to_request()
        }
    }
}

impl Aircraft {
    pub(crate) fn to_request(&self) -> AircraftCreateRequest {
        AircraftCreateRequest {
            aircraft_id: self.aircraft_id,
            registration_number: self.registration_number.clone(),
            manufacture_date: self.manufacture_date.clone(),
            airline_id: self.airline.as_ref().and_then(|a| a.airline_id),
            model_id: self.model.as_ref().and_then(|m| m.model_id),
        }
    }

    pub(crate) fn from_request(id: i64, request: &AircraftCreateRequest) -> Self {
        Aircraft {
            aircraft_id: Some(id),
            registration_number: request.registration_number.clone(),
            manufacture_date: request.manufacture_date.clone(),
            airline: request.airline_id.map(|airline_id| Airline {
                airline_id: Some(airline_id),
                ..Default::default()
            }),
            model: request.model_id.map(|model_id| AircraftModel {
                model_id: Some(model_id),
                ..Default::default()
            }),
            flights: None,
        }
    }
}

impl Flight {
    pub(crate) fn to_request(&self) -> FlightCreateRequest {
        FlightCreateRequest {
            flight_id: self.flight_id,
            aircraft_id: self.aircraft.as_ref().and_then(|a| a.aircraft_id),
            departure_airport_id: self.departure_airport.as_ref().and_then(|a| a.airport_id),
            arrival_airport_id: self.arrival_airport.as_ref().and_then(|a| a.airport_id),
            departure_time: self.departure_time.clone(),
            arrival_time: self.arrival_time.clone(),
            flight_hours: self.flight_hours,
            ticket_price: self.ticket_price,
        }
    }

    pub(crate) fn from_request(id: i64, request: &FlightCreateRequest) -> Self {
        let airport = |airport_id: i64| Airport {
            airport_id: Some(airport_id),
            ..Default::default()
        };
        Flight {
            flight_id: Some(id),
            aircraft: request.aircraft_id.map(|aircraft_id| Aircraft {
                aircraft_id: Some(aircraft_id),
                ..Default::default()
            }),
            departure_airport: request.departure_airport_id.map(airport),
            arrival_airport: request.arrival_airport_id.map(airport),
            departure_time: request.departure_time.clone(),
            arrival_time: request.arrival_time.clone(),
            flight_hours: request.flight_hours,
            ticket_price: request.ticket_price,
            tickets: None,
            crew_assignments: None,
        }
    }
}

impl CrewMember {
    pub(crate) fn to_request(&self) -> CrewMemberCreateRequest {
        CrewMemberCreateRequest {
            crew_id: self.crew_id,
            airline_id: self.airline.as_ref().and_then(|a| a.airline_id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            salary: self.salary,
            hire_date: self.hire_date.clone(),
            qualification: self.qualification.clone(),
        }
    }

    pub(crate) fn from_request(id: i64, request: &CrewMemberCreateRequest) -> Self {
        CrewMember {
            crew_id: Some(id),
            airline: request.airline_id.map(|airline_id| Airline {
                airline_id: Some(airline_id),
                ..Default::default()
            }),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            salary: request.salary,
            hire_date: request.hire_date.clone(),
            qualification: request.qualification.clone(),
            assignments: None,
        }
    }
}

impl AircraftModel {
    pub(crate) fn to_request(&self) -> AircraftModelCreateRequest {
        AircraftModelCreateRequest {
            model_id: self.model_id,
            class_id: self.aircraft_class.as_ref().and_then(|c| c.class_id),
            name: self.name.clone(),
            manufacturer: self.manufacturer.clone(),
            crew_size: self.crew_size,
            passenger_capacity: self.passenger_capacity,
            operational_cost: self.operational_cost,
            fuel_consumption: self.fuel_consumption,
        }
    }

    pub(crate) fn from_request(id: i64, request: &AircraftModelCreateRequest) -> Self {
        AircraftModel {
            model_id: Some(id),
            aircraft_class: request.class_id.map(|class_id| AircraftClass {
                class_id: Some(class_id),
                ..Default::default()
            }),
            name: request.name.clone(),
            manufacturer: request.manufacturer.clone(),
            crew_size: request.crew_size,
            passenger_capacity: request.passenger_capacity,
            operational_cost: request.operational_cost,
            fuel_consumption: request.fuel_consumption,
            aircraft: None,
        }
    }
}

impl CrewAssignment {
    pub(crate) fn to_request(&self) -> CrewAssignmentCreateRequest {
        CrewAssignmentCreateRequest {
            assignment_id: self.assignment_id,
            crew_member_id: self
                .crew_member_id
                .or_else(|| self.crew_member.as_ref().and_then(|c| c.crew_id)),
            flight_id: self
                .flight_id
                .or_else(|| self.flight.as_ref().and_then(|f| f.flight_id)),
            role: self.role.clone(),
        }
    }

    pub(crate) fn from_request(id: i64, request: &CrewAssignmentCreateRequest) -> Self {
        CrewAssignment {
            assignment_id: Some(id),
            crew_member_id: request.crew_member_id,
            flight_id: request.flight_id,
            crew_member: None,
            flight: None,
            role: request.role.clone(),
        }
    }
}

impl Ticket {
    pub(crate) fn to_request(&self) -> TicketCreateRequest {
        TicketCreateRequest {
            ticket_id: self.ticket_id,
            flight_id: self.flight.as_ref().and_then(|f| f.flight_id),
            passenger_name: self.passenger_name.clone(),
            passenger_passport: self.passenger_passport.clone(),
            seat_number: self.seat_number.clone(),
            price: self.price,
        }
    }

    pub(crate) fn from_request(id: i64, request: &TicketCreateRequest) -> Self {
        Ticket {
            ticket_id: Some(id),
            flight: request.flight_id.map(|flight_id| Flight {
                flight_id: Some(flight_id),
                ..Default::default()
            }),
            passenger_name: request.passenger_name.clone(),
            passenger_passport: request.passenger_passport.clone(),
            seat_number: request.seat_number.clone(),
            price: request.price,
        }
    }
}
