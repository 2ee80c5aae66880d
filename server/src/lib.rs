//! HTTP front end for the distribution network simulator.
pub mod registry;
pub mod routes;
