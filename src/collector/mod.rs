mod collector_error;
mod fetch;
pub mod models;

pub use collector_error::CollectorError;
pub use fetch::{Collection, DistrictCollector, FetchOutcome, DISTRICT};
