pub mod error;
pub mod name_cache;
pub mod timezone;
