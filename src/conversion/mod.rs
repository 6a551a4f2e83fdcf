//! INF to JSON conversion module
//!
//! This module contains the core conversion logic, configuration,
//! type conversion, limit checks, and statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;
pub mod typing;

pub use config::{ConversionConfig, Encoding};
pub use engine::{convert_inf_to_json, ConversionEngine, JsonData};
pub use typing::TypedValue;

pub use crate::error::ConversionResult;
