//! Task-tracking domain model.
//!
//! # Responsibility
//! - Define the aggregates (board, todo, agile todo, note, effort) and the
//!   standalone item index.
//! - Compose every parent/child link from `OrderedUniqueCollection`.
//!
//! # Invariants
//! - Every aggregate carries an identity assigned at construction.
//! - Constructors never validate and never fail; `Model::validate` is the
//!   explicit, side-effect-free correctness step.

pub mod agile_todo;
pub mod board;
pub mod colour;
pub mod effort;
pub mod index;
pub mod note;
pub mod todo;

use crate::validation::ValidationError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

/// Shared capability of every aggregate: a debug rendering plus validation.
///
/// Rendering is for humans only and is not a round-trip format.
pub trait Model: Display {
    /// Runs every declared constraint and reports all failures together.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn render_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn render_optional_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value.map(render_timestamp).unwrap_or_default()
}
