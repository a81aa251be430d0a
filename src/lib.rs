pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod identity_client;
pub mod profile_store;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
