pub mod config;
pub mod db;
pub mod handlers;
pub mod routes;
pub mod utils;
