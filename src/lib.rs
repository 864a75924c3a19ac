// Library exports for Teletipo
// This allows integration tests and external code to use Teletipo modules

pub mod ascii;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod terminal;
