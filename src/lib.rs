//! provmap - China province semiconductor map dashboard
//!
//! Loads static province, semiconductor company and AI company datasets,
//! validates the province schema, aggregates company statistics and serves
//! the results to a map front end.

pub mod aggregate;
pub mod cli;
pub mod dashboard;
pub mod data;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod views;
