//! HTTP surface of the console
//!
//! - `GET /health`, `GET /healthz`
//! - `GET /api/sql-queries`: available reports
//! - `POST /api/sql-queries`: run a report, answers `{ "data": [rows] }`
//! - `GET /api/screens`: entity screen layouts
//! - `ANY /api/proxy/{*path}`: relay to the REST backend

pub mod builder;
pub mod handlers;

pub use builder::ConsoleServer;
pub use handlers::AppState;
