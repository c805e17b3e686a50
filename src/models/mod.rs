pub mod day_summary;
pub mod location;
pub mod punch;
pub mod punch_kind;
pub mod user;
