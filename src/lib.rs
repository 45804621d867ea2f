//! Browser client for the Workinout rep counter.
//!
//! Selects which exercise the counting service tracks and mirrors the live
//! count for that exercise into the page.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod mode;
pub mod poller;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod testing;

pub use controller::ModeController;
pub use display::{DisplaySink, DomDisplay};
pub use error::ClientError;
pub use mode::{Channel, ExerciseMode, ModeCell};
pub use poller::CountPoller;
pub use service::{CountService, HttpCountService, SetExerciseRequest};
pub use snapshot::{format_count, CountSnapshot};
