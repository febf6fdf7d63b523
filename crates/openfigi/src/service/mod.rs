//! Streaming validation and generation on top of tokio.
//!
//! [`FigiService`] is the entry point. Each streaming call spawns one producer
//! task that feeds a bounded channel; the caller pulls results from the
//! returned stream at its own pace.
//!
//! ## Structure
//!
//! - [`config`] - buffer sizing.
//! - [`handler`] - the service type and its operations.
//! - `producer` - the background loops behind the streams.

pub mod config;
pub mod handler;
mod producer;

pub use config::*;
pub use handler::*;
