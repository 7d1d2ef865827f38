pub mod controller;
pub mod models;
pub mod permission;
pub mod platform;
pub mod reducer;
pub mod settings;
