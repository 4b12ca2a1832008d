pub mod auth;
pub mod backend;
pub mod config;
pub mod domain;
pub mod locale;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
