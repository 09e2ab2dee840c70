//! Accumulating constraint validation.
//!
//! # Responsibility
//! - Record every failed constraint of one validation pass, in call order.
//! - Turn the recorded failures into one combined `ValidationError`.
//!
//! # Invariants
//! - Every helper is expressed through [`Validator::check`]; nothing
//!   short-circuits, so all declared checks run.
//! - A `Validator` is built per pass and consumed by [`Validator::all_valid`].
//! - Validation never logs and never panics.

pub mod format;
pub mod number;

pub use number::{Integer, Number};

use crate::duration::parse_duration;
use chrono::{DateTime, TimeZone};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_PORT: i128 = 65_535;
/// Unix seconds of the Unix epoch and of 0001-01-01T00:00:00Z.
const ZERO_INSTANT_SECONDS: [i64; 2] = [0, -62_135_596_800];

/// Combined error listing every failed check of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Failure messages in the order the checks ran.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false` for errors produced by [`Validator::all_valid`].
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

impl Error for ValidationError {}

/// Single-use accumulator of constraint failures.
#[derive(Debug, Default)]
pub struct Validator {
    failures: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` when `condition` is false.
    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.failures.push(message.into());
        }
        self
    }

    pub fn is_present<T>(&mut self, field: Option<&T>, message: impl Into<String>) -> &mut Self {
        self.check(field.is_some(), message)
    }

    pub fn is_not_present<T>(&mut self, field: Option<&T>, message: impl Into<String>) -> &mut Self {
        self.check(field.is_none(), message)
    }

    pub fn is_not_empty(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(!field.is_empty(), message)
    }

    pub fn is_empty(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(field.is_empty(), message)
    }

    /// Exact length, counted in characters.
    pub fn is_size(&mut self, field: &str, size: usize, message: impl Into<String>) -> &mut Self {
        self.check(field.chars().count() == size, message)
    }

    /// Inclusive character-length range.
    pub fn is_length_between(
        &mut self,
        field: &str,
        min: usize,
        max: usize,
        message: impl Into<String>,
    ) -> &mut Self {
        let length = field.chars().count();
        self.check(length >= min && length <= max, message)
    }

    pub fn is_alphanumeric(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_alphanumeric(field), message)
    }

    pub fn is_base64(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_base64(field), message)
    }

    pub fn is_lowercase(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_lowercase(field), message)
    }

    pub fn is_uppercase(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_uppercase(field), message)
    }

    pub fn is_credit_card(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_credit_card(field), message)
    }

    pub fn is_domain(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_domain(field), message)
    }

    pub fn is_email(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_email(field), message)
    }

    pub fn is_guid(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_guid(field), message)
    }

    pub fn is_hostname(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_hostname(field), message)
    }

    pub fn is_ip(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_ip(field), message)
    }

    pub fn is_url(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_url(field), message)
    }

    pub fn is_std_date(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(format::is_std_date(field), message)
    }

    pub fn is_duration(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.check(parse_duration(field).is_some(), message)
    }

    /// Strictly greater than `min`.
    pub fn is_greater_than<N: Number>(
        &mut self,
        field: N,
        min: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.check(field > min, message)
    }

    /// Strictly less than `max`.
    pub fn is_less_than<N: Number>(
        &mut self,
        field: N,
        max: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.check(field < max, message)
    }

    /// Inclusive range. `NaN` never passes.
    pub fn is_between_numbers<N: Number>(
        &mut self,
        field: N,
        min: N,
        max: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.check(field >= min && field <= max, message)
    }

    pub fn is_positive<N: Number>(&mut self, field: N, message: impl Into<String>) -> &mut Self {
        self.check(field > N::ZERO, message)
    }

    /// Unsigned values always fail.
    pub fn is_negative<N: Number>(&mut self, field: N, message: impl Into<String>) -> &mut Self {
        self.check(field < N::ZERO, message)
    }

    /// TCP/UDP port range, 0 through 65535 inclusive.
    pub fn is_port<N: Integer>(&mut self, field: N, message: impl Into<String>) -> &mut Self {
        let in_range = field
            .to_i128()
            .is_some_and(|value| (0..=MAX_PORT).contains(&value));
        self.check(in_range, message)
    }

    /// A date is undefined when it sits on a zero instant: the Unix epoch
    /// (`DateTime::default()`) or `0001-01-01T00:00:00Z`, the zero value of
    /// timestamps imported from other tools.
    pub fn is_date_defined<Tz: TimeZone>(
        &mut self,
        field: &DateTime<Tz>,
        message: impl Into<String>,
    ) -> &mut Self {
        let is_zero = field.timestamp_subsec_nanos() == 0
            && ZERO_INSTANT_SECONDS.contains(&field.timestamp());
        self.check(!is_zero, message)
    }

    /// `field` strictly before `bound`.
    pub fn is_date_before<Tz: TimeZone, Tz2: TimeZone>(
        &mut self,
        field: &DateTime<Tz>,
        bound: &DateTime<Tz2>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.check(field < bound, message)
    }

    /// `field` strictly after `bound`.
    pub fn is_date_after<Tz: TimeZone, Tz2: TimeZone>(
        &mut self,
        field: &DateTime<Tz>,
        bound: &DateTime<Tz2>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.check(field > bound, message)
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// Ends the pass: `Ok(())` when nothing failed, otherwise every failure
    /// message in check order.
    pub fn all_valid(self) -> Result<(), ValidationError> {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            messages: self.failures,
        })
    }
}
