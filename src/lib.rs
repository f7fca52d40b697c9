//! # AirOps Console
//!
//! Backend of a management console for an airline-operations dataset:
//! airlines, aircraft, models and classes, airports, flights, crew, crew
//! assignments and tickets.
//!
//! ## Features
//!
//! - **Table engine**: search, sort and pagination over fetched records,
//!   with nested field paths and absent-last ordering
//! - **Typed resources**: one model and one form payload per entity, with
//!   trimming and validation before anything is sent
//! - **REST client**: CRUD and search endpoints of the airline backend
//! - **Entity screens**: per-screen state (rows, table, form, notices)
//! - **Report queries**: five fixed joins with parameterized date, airline
//!   and airport filters
//! - **HTTP server**: report endpoint and a pass-through proxy to the backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airops::prelude::*;
//!
//! let api = ApiClient::new("http://localhost:8080/api")?;
//! let mut screen = EntityScreen::<Airline, _>::new(api.resource::<Airline>());
//! screen.refresh().await?;
//!
//! screen.table_mut().set_search_term("russia");
//! screen.table_mut().set_sort("name:desc");
//! for row in screen.view().visible() {
//!     println!("{}", row.entity().name);
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod queries;
pub mod screens;
pub mod server;
pub mod storage;
pub mod table;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ConfigError, ConsoleError, QueryError, ValidationError},
        query::{PaginationMeta, SortDirection, SortSpec},
        record::{FieldPath, Record, Row},
        validation::{PayloadRules, Validate, normalize},
    };

    // === Table ===
    pub use crate::table::{TableConfig, TableState, TableView};

    // === Entities ===
    pub use crate::entities::{
        Aircraft, AircraftClass, AircraftModel, Airline, Airport, CrewAssignment, CrewMember,
        Flight, Operation, Resource, Ticket,
    };
    pub use crate::impl_resource;

    // === Backends ===
    pub use crate::client::{ApiClient, FlightSearch, ResourceClient};
    pub use crate::storage::{InMemoryResourceStore, ResourceStore};

    // === Screens ===
    pub use crate::screens::{EntityScreen, Notice, NoticeLevel, ScreenResource, ScreenSpec};

    // === Queries ===
    #[cfg(feature = "postgres")]
    pub use crate::queries::PgQueryExecutor;
    pub use crate::queries::{
        BoundQuery, QueryDispatcher, QueryExecutor, QueryFilters, QueryRequest, ReportQuery,
    };

    // === Config & server ===
    pub use crate::config::ConsoleConfig;
    pub use crate::server::ConsoleServer;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
