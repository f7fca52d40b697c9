//! Airline-operations domain model
//!
//! Every backend collection is described by a [`Resource`]: where it lives
//! (`PATH`), which operations the backend exposes for it, and which payload
//! it accepts on create and update.

#[macro_use]
pub mod macros;
pub mod models;
pub mod payloads;

pub use models::{
    Aircraft, AircraftClass, AircraftModel, Airline, Airport, CREW_ROLES, CrewAssignment,
    CrewMember, Flight, Ticket,
};
pub use payloads::{
    AircraftCreateRequest, AircraftModelCreateRequest, CrewAssignmentCreateRequest,
    CrewMemberCreateRequest, FlightCreateRequest, TicketCreateRequest,
};

use crate::core::validation::Validate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// A CRUD operation on a resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ALL_OPERATIONS: &[Operation] = &[
    Operation::List,
    Operation::Get,
    Operation::Create,
    Operation::Update,
    Operation::Delete,
];

/// A record type backed by a REST collection
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection endpoint, relative to the API base (`"aircraft-models"`)
    const PATH: &'static str;

    /// Human-readable singular name used in messages
    const SINGULAR: &'static str;

    /// Operations the backend exposes for this collection
    const OPERATIONS: &'static [Operation];

    /// Body sent on create and update
    type Payload: Validate + DeserializeOwned + Clone + Default + Send + Sync + 'static;

    /// Backend-assigned id, `None` before the record is created
    fn id(&self) -> Option<i64>;

    /// Payload that recreates this record, used to prefill edit forms
    fn to_payload(&self) -> Self::Payload;

    /// Materialize a record from a payload without a backend round trip
    fn from_payload(id: i64, payload: &Self::Payload) -> Self;

    fn supports(operation: Operation) -> bool {
        Self::OPERATIONS.contains(&operation)
    }
}

impl_resource!(Airline {
    path: "airlines",
    singular: "airline",
    id: airline_id,
    payload: Airline,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(Aircraft {
    path: "aircrafts",
    singular: "aircraft",
    id: aircraft_id,
    payload: AircraftCreateRequest,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(AircraftModel {
    path: "aircraft-models",
    singular: "aircraft model",
    id: model_id,
    payload: AircraftModelCreateRequest,
    operations: [List, Create],
});

impl_resource!(AircraftClass {
    path: "aircraft-classes",
    singular: "aircraft class",
    id: class_id,
    payload: AircraftClass,
    operations: [List, Create],
});

impl_resource!(Airport {
    path: "airports",
    singular: "airport",
    id: airport_id,
    payload: Airport,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(Flight {
    path: "flights",
    singular: "flight",
    id: flight_id,
    payload: FlightCreateRequest,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(CrewMember {
    path: "crew-members",
    singular: "crew member",
    id: crew_id,
    payload: CrewMemberCreateRequest,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(CrewAssignment {
    path: "crew-assignments",
    singular: "crew assignment",
    id: assignment_id,
    payload: CrewAssignmentCreateRequest,
    operations: [List, Get, Create, Update, Delete],
});

impl_resource!(Ticket {
    path: "tickets",
    singular: "ticket",
    id: ticket_id,
    payload: TicketCreateRequest,
    operations: [List, Create],
});
