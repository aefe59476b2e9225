pub mod auth;
pub mod booking;
pub mod client;
pub mod company;
pub mod schedule;
pub mod service;
pub mod working_hour;
