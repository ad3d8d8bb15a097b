//! Async client for the Puppy Bowl roster REST API.
//!
//! The remote service wraps every response in a `{success, data|error}`
//! JSON envelope. This crate owns the transport mechanics: URL
//! construction, envelope unwrapping, and the error taxonomy
//! (transport failure vs. application-level rejection). Consumers only
//! ever see unwrapped payloads or an [`Error`].

pub mod client;
pub mod error;
pub mod models;
pub mod players;
pub mod teams;
pub mod transport;

pub use client::RosterClient;
pub use error::Error;
pub use models::{NewPlayer, WirePlayer, WireTeam};
pub use transport::TransportConfig;
