pub mod config;
pub mod geocoding;
pub mod geodesy;
pub mod util;
