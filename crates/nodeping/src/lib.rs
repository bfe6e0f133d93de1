//! NodePing uptime-monitoring API client.
//!
//! Typed, synchronous access to the NodePing v1 REST API: list and fetch
//! checks, retrieve uptime statistics, and list contact groups. Every
//! operation performs one authenticated GET and decodes the JSON response;
//! failures surface through a single [`Error`] enum.
//!
//! ```no_run
//! use nodeping::{Client, ClientConfig};
//!
//! fn main() -> Result<(), nodeping::Error> {
//!     let client = Client::new(ClientConfig {
//!         token: "my-api-token".to_string(),
//!         ..ClientConfig::default()
//!     })?;
//!
//!     for check in client.list_checks()? {
//!         println!("{} {} ({})", check.id, check.label, check.check_type);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{
    Check, CheckNotification, CheckParameters, CheckRequest, ContactGroup, NotificationSchedule,
    Queue, ServiceError, UptimeRecord,
};
