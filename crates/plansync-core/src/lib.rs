//! # plansync-core
//!
//! Configuration, domain model, week resolution, message formatting, and the
//! planning-service trait for plansync.

pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod traits;
pub mod week;
