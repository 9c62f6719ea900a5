pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod response;

pub use client::Connector;
pub use config::ClientConfig;
pub use error::{ProcesetError, ResponseFormatError};
