pub mod booking;
pub mod client;
pub mod company;
pub mod health;
pub mod public;
pub mod service;
pub mod working_hour;
