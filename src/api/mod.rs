mod types;
mod client;
mod time;

pub use types::*;
pub use client::{ApiClient, RemoteSource};
pub use time::{parse_date, parse_datetime};
