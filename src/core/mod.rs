pub mod config;
pub mod constants;
pub mod geo;
pub mod geodesy;
pub mod map;
pub mod viewport;
