//! Table layout of every entity screen

use crate::config::ScreenOverride;
use crate::core::query::SortSpec;
use crate::entities::{
    Aircraft, AircraftClass, AircraftModel, Airline, Airport, CrewAssignment, CrewMember, Flight,
    Resource, Ticket,
};
use crate::table::TableConfig;
use serde::Serialize;

/// Rows per page on entity screens
pub const SCREEN_PAGE_SIZE: usize = 12;

/// One entry of a screen's sort selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub spec: &'static str,
    pub label: &'static str,
}

const fn sort(spec: &'static str, label: &'static str) -> SortOption {
    SortOption { spec, label }
}

/// Static description of an entity screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSpec {
    /// Resource path the screen manages
    pub resource: &'static str,
    pub title: &'static str,
    /// Field paths scanned by the search box
    pub search_fields: &'static [&'static str],
    pub sort_options: &'static [SortOption],
    pub default_sort: &'static str,
    pub page_size: usize,
}

impl ScreenSpec {
    /// Table configuration, with configured overrides applied
    pub fn table_config(&self, overrides: Option<&ScreenOverride>) -> TableConfig {
        let search_fields: Vec<String> = overrides
            .and_then(|o| o.search_fields.clone())
            .unwrap_or_else(|| self.search_fields.iter().map(|f| f.to_string()).collect());
        let default_sort = overrides
            .and_then(|o| o.default_sort.clone())
            .unwrap_or_else(|| self.default_sort.to_string());
        let page_size = overrides
            .and_then(|o| o.page_size)
            .unwrap_or(self.page_size);

        TableConfig::new(search_fields)
            .with_default_sort(default_sort)
            .with_page_size(page_size)
    }

    /// Label of a sort specifier, matched on field and direction
    pub fn sort_label(&self, spec: &str) -> Option<&'static str> {
        let wanted = SortSpec::parse(spec)?;
        self.sort_options
            .iter()
            .find(|option| SortSpec::parse(option.spec).as_ref() == Some(&wanted))
            .map(|option| option.label)
    }
}

/// Resources that have a management screen
pub trait ScreenResource: Resource {
    const SCREEN: ScreenSpec;
}

impl ScreenResource for Airline {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: Airline::PATH,
        title: "Airlines",
        search_fields: &["name", "country", "contactEmail", "contactPhone"],
        sort_options: &[
            sort("name:asc", "Name (A-Z)"),
            sort("name:desc", "Name (Z-A)"),
            sort("country:asc", "Country (A-Z)"),
            sort("country:desc", "Country (Z-A)"),
        ],
        default_sort: "name",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for Aircraft {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: Aircraft::PATH,
        title: "Aircraft",
        search_fields: &[
            "registrationNumber",
            "manufactureDate",
            "model.name",
            "model.manufacturer",
            "airline.name",
        ],
        sort_options: &[
            sort("registrationNumber:asc", "Registration (A-Z)"),
            sort("registrationNumber:desc", "Registration (Z-A)"),
            sort("manufactureDate:desc", "Newest first"),
            sort("manufactureDate:asc", "Oldest first"),
        ],
        default_sort: "registrationNumber",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for AircraftModel {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: AircraftModel::PATH,
        title: "Aircraft models",
        search_fields: &["name", "manufacturer", "aircraftClass.name"],
        sort_options: &[
            sort("name:asc", "Name (A-Z)"),
            sort("manufacturer:asc", "Manufacturer (A-Z)"),
            sort("passengerCapacity:desc", "Largest capacity"),
            sort("operationalCost:asc", "Cheapest to operate"),
            sort("fuelConsumption:asc", "Lowest fuel consumption"),
        ],
        default_sort: "name",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for AircraftClass {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: AircraftClass::PATH,
        title: "Aircraft classes",
        search_fields: &["name"],
        sort_options: &[
            sort("name:asc", "Name (A-Z)"),
            sort("range:desc", "Longest range"),
            sort("runwayLength:asc", "Shortest runway"),
        ],
        default_sort: "name",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for Airport {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: Airport::PATH,
        title: "Airports",
        search_fields: &["name", "city", "country"],
        sort_options: &[
            sort("name:asc", "Name (A-Z)"),
            sort("city:asc", "City (A-Z)"),
            sort("country:asc", "Country (A-Z)"),
            sort("serviceCost:asc", "Service cost"),
            sort("parkingCost:asc", "Parking cost"),
        ],
        default_sort: "name",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for Flight {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: Flight::PATH,
        title: "Flights",
        search_fields: &[
            "aircraft.registrationNumber",
            "departureAirport.name",
            "departureAirport.city",
            "arrivalAirport.name",
            "arrivalAirport.city",
            "departureTime",
        ],
        sort_options: &[
            sort("departureTime:desc", "Latest departure"),
            sort("departureTime:asc", "Earliest departure"),
            sort("ticketPrice:asc", "Cheapest"),
            sort("ticketPrice:desc", "Most expensive"),
            sort("flightHours:asc", "Shortest"),
        ],
        default_sort: "departureTime:desc",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for CrewMember {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: CrewMember::PATH,
        title: "Crew members",
        search_fields: &["firstName", "lastName", "qualification", "airline.name"],
        sort_options: &[
            sort("lastName:asc", "Last name (A-Z)"),
            sort("firstName:asc", "First name (A-Z)"),
            sort("hireDate:asc", "Longest serving"),
            sort("salary:desc", "Highest salary"),
        ],
        default_sort: "lastName",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for CrewAssignment {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: CrewAssignment::PATH,
        title: "Crew assignments",
        search_fields: &[
            "role",
            "crewMember.firstName",
            "crewMember.lastName",
            "flight.departureAirport.city",
            "flight.arrivalAirport.city",
        ],
        sort_options: &[
            sort("role:asc", "Role (A-Z)"),
            sort("assignmentId:desc", "Most recent"),
        ],
        default_sort: "role",
        page_size: SCREEN_PAGE_SIZE,
    };
}

impl ScreenResource for Ticket {
    const SCREEN: ScreenSpec = ScreenSpec {
        resource: Ticket::PATH,
        title: "Tickets",
        search_fields: &[
            "passengerName",
            "passengerPassport",
            "seatNumber",
            "flight.departureAirport.name",
            "flight.arrivalAirport.name",
        ],
        sort_options: &[
            sort("passengerName:asc", "Passenger (A-Z)"),
            sort("price:asc", "Cheapest"),
            sort("price:desc", "Most expensive"),
            sort("seatNumber:asc", "Seat"),
        ],
        default_sort: "passengerName",
        page_size: SCREEN_PAGE_SIZE,
    };
}

/// Every entity screen, in navigation order
pub fn catalog() -> [ScreenSpec; 9] {
    [
        Airline::SCREEN,
        Aircraft::SCREEN,
        AircraftModel::SCREEN,
        AircraftClass::SCREEN,
        Airport::SCREEN,
        Flight::SCREEN,
        CrewMember::SCREEN,
        CrewAssignment::SCREEN,
        Ticket::SCREEN,
    ]
}
