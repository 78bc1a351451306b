pub mod animation;
pub mod config;
pub mod controllers;
pub mod error;
pub mod installation;
pub mod models;
pub mod views;

pub use error::FilError;
pub use installation::Installation;
