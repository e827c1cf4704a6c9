// parkdash-api: Async Rust client for the parking administration REST backend

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod health;
mod spaces;
mod zones;

pub use client::ParkingClient;
pub use error::Error;
pub use transport::TransportConfig;
