pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod transport;
