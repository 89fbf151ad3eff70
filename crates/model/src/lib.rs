pub mod activity;
pub mod center;
pub mod date_range;
pub mod errors;
pub mod role;
pub mod statistics;
