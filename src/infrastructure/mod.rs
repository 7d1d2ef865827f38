pub mod adapter;
pub mod logging;
pub mod permissions;
