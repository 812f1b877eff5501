pub mod api;
pub mod clock;
pub mod config;
pub mod docs;
pub mod engine;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
