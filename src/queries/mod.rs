//! Fixed report queries
//!
//! The reports screen picks one of five predefined joins by tag and may
//! narrow it with a departure date range, an airline and an airport. The set
//! of statements is closed: a tag selects a `&'static str` and the filters
//! are always bound as parameters.
//!
//! ```
//! use airops::queries::{QueryRequest, ReportQuery};
//! use serde_json::json;
//!
//! let request = QueryRequest::from_json(json!({
//!     "queryType": "tickets",
//!     "startDate": "2024-03-01",
//!     "endDate": "",
//!     "airlineId": "7",
//! }))
//! .unwrap();
//! let bound = request.bind().unwrap();
//!
//! assert_eq!(bound.query, ReportQuery::Tickets);
//! assert_eq!(bound.filters.airline_id, Some(7));
//! assert_eq!(bound.filters.end_date, None);
//! ```

pub mod executor;
pub mod statements;

pub use executor::{QueryDispatcher, QueryExecutor};

#[cfg(feature = "postgres")]
pub use executor::PgQueryExecutor;

use crate::core::error::QueryError;
use crate::core::validation::filters::{apply_to_fields, blank_to_null};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One of the predefined report joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportQuery {
    /// Flights with aircraft, airline and both airports
    Flights,
    /// Crew members with the flights they are assigned to
    Crew,
    /// Fleet size, flight count and prices per airline
    Airlines,
    /// Departures, arrivals and airlines served per airport
    Airports,
    /// Tickets with flight, route and aircraft details
    Tickets,
}

impl ReportQuery {
    pub const ALL: [ReportQuery; 5] = [
        ReportQuery::Flights,
        ReportQuery::Crew,
        ReportQuery::Airlines,
        ReportQuery::Airports,
        ReportQuery::Tickets,
    ];

    /// Accepted tags, in menu order
    pub const TAGS: &'static [&'static str] = &["flights", "crew", "airlines", "airports", "tickets"];

    pub fn tag(&self) -> &'static str {
        match self {
            ReportQuery::Flights => "flights",
            ReportQuery::Crew => "crew",
            ReportQuery::Airlines => "airlines",
            ReportQuery::Airports => "airports",
            ReportQuery::Tickets => "tickets",
        }
    }

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            ReportQuery::Flights => "Flights with aircraft details",
            ReportQuery::Crew => "Crew assignments",
            ReportQuery::Airlines => "Airline statistics",
            ReportQuery::Airports => "Airport statistics",
            ReportQuery::Tickets => "Tickets with flight details",
        }
    }

    pub fn statement(&self) -> &'static str {
        match self {
            ReportQuery::Flights => statements::FLIGHTS,
            ReportQuery::Crew => statements::CREW,
            ReportQuery::Airlines => statements::AIRLINES,
            ReportQuery::Airports => statements::AIRPORTS,
            ReportQuery::Tickets => statements::TICKETS,
        }
    }

    /// Ordering applied to the statement's output columns
    pub fn order_by(&self) -> &'static str {
        match self {
            ReportQuery::Flights | ReportQuery::Crew | ReportQuery::Tickets => {
                statements::BY_DEPARTURE
            }
            ReportQuery::Airlines | ReportQuery::Airports => statements::BY_TOTAL_FLIGHTS,
        }
    }

    /// Look up a query by tag, exact match
    pub fn parse(tag: &str) -> Result<Self, QueryError> {
        Self::ALL
            .into_iter()
            .find(|q| q.tag() == tag)
            .ok_or_else(|| QueryError::UnknownQuery {
                tag: tag.to_string(),
            })
    }
}

impl fmt::Display for ReportQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ReportQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Optional narrowing of a report
///
/// `end_date` is inclusive: flights departing any time that day match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub airline_id: Option<i64>,
    pub airport_id: Option<i64>,
}

impl QueryFilters {
    pub fn check(&self) -> Result<(), QueryError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(QueryError::InvalidFilter {
                    field: "startDate",
                    message: format!("{} is after the end date {}", start, end),
                });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Id filters arrive from select boxes as strings and from scripts as numbers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum IdParam {
    Number(i64),
    Text(String),
}

impl IdParam {
    fn parse(self, field: &'static str) -> Result<i64, QueryError> {
        match self {
            IdParam::Number(id) => Ok(id),
            IdParam::Text(text) => text.trim().parse().map_err(|_| QueryError::InvalidFilter {
                field,
                message: format!("'{}' is not an id", text),
            }),
        }
    }
}

fn parse_date(field: &'static str, value: Option<String>) -> Result<Option<NaiveDate>, QueryError> {
    value
        .map(|text| {
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
                QueryError::InvalidFilter {
                    field,
                    message: format!("'{}' is not a YYYY-MM-DD date", text),
                }
            })
        })
        .transpose()
}

/// Body of `POST /api/sql-queries`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query_type: String,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    airline_id: Option<IdParam>,
    #[serde(default)]
    airport_id: Option<IdParam>,
}

impl QueryRequest {
    /// A request for a tag without filters
    pub fn new(query_type: impl Into<String>) -> Self {
        Self {
            query_type: query_type.into(),
            start_date: None,
            end_date: None,
            airline_id: None,
            airport_id: None,
        }
    }

    /// Read a request body, blank filter fields count as absent
    pub fn from_json(body: Value) -> Result<Self, QueryError> {
        let body = apply_to_fields(body, blank_to_null());
        serde_json::from_value(body).map_err(|e| QueryError::InvalidRequest {
            message: e.to_string(),
        })
    }

    /// Resolve the tag and parse the filters
    pub fn bind(self) -> Result<BoundQuery, QueryError> {
        let query = ReportQuery::parse(&self.query_type)?;
        let filters = QueryFilters {
            start_date: parse_date("startDate", self.start_date)?,
            end_date: parse_date("endDate", self.end_date)?,
            airline_id: self.airline_id.map(|id| id.parse("airlineId")).transpose()?,
            airport_id: self.airport_id.map(|id| id.parse("airportId")).transpose()?,
        };
        filters.check()?;
        Ok(BoundQuery { query, filters })
    }
}

/// A report query ready to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundQuery {
    pub query: ReportQuery,
    pub filters: QueryFilters,
}

impl BoundQuery {
    pub fn new(query: ReportQuery) -> Self {
        Self {
            query,
            filters: QueryFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: QueryFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn statement(&self) -> &'static str {
        self.query.statement()
    }
}
