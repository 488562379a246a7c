//! flights-storage: the read-only query gateway over the flights database.
//!
//! `FlightGateway` owns one SQLite connection and answers the four fixed
//! lookups in `queries::FlightQuery`, returning normalized `Record`s.

pub mod connection;
pub mod gateway;
pub mod queries;

pub use connection::DatabaseTarget;
pub use gateway::FlightGateway;
pub use queries::{FlightQuery, QueryCatalog, QueryKind};
