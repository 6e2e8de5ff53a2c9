pub mod api;
pub mod client;

pub use api::{RollStatus, ScaleResult};
pub use client::{ElastigroupClient, SpotHttpClient};
