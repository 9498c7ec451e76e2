//! # Floorplan Core
//!
//! Core types and utilities shared by the floor plan editor crates.
//! Provides length units, the numeric limits every geometric operation
//! honours, and the error taxonomy for plan documents.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{Error, PlanDocumentError, Result};
pub use units::{format_area, format_length, LengthUnit};
