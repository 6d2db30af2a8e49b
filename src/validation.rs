//! Validators
//!
//! A validator is a stateless predicate over a decoded value plus a
//! human-readable diagnostic. Typed getters run the validator on every value
//! they hand out (stored or default) and fail with `ValidationError` carrying
//! the diagnostic when the value is rejected.

use std::any::type_name;
use std::fmt::{Debug, Display};

/// Accept or reject a decoded value.
pub trait Validator<T: ?Sized> {
    /// True if `value` is acceptable.
    fn accepts(&self, value: &T) -> bool;

    /// Diagnostic shown when a value is rejected.
    fn describe(&self) -> String;

    /// Identity recorded in the request ledger.
    fn name(&self) -> String {
        short_type_name(type_name::<Self>())
    }
}

/// Accepts every value. The default when no validator is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateAny;

impl<T: ?Sized> Validator<T> for ValidateAny {
    fn accepts(&self, _value: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "ValidateAny: all values are valid".to_string()
    }
}

/// Rejects every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateNone;

impl<T: ?Sized> Validator<T> for ValidateNone {
    fn accepts(&self, _value: &T) -> bool {
        false
    }

    fn describe(&self) -> String {
        "ValidateNone: no value is valid".to_string()
    }
}

/// Accepts values strictly below the bound.
#[derive(Debug, Clone)]
pub struct LessThan<T>(pub T);

impl<T: PartialOrd + Display> Validator<T> for LessThan<T> {
    fn accepts(&self, value: &T) -> bool {
        *value < self.0
    }

    fn describe(&self) -> String {
        format!("LessThan: value must be < {}", self.0)
    }
}

/// Accepts values strictly above the bound.
#[derive(Debug, Clone)]
pub struct GreaterThan<T>(pub T);

impl<T: PartialOrd + Display> Validator<T> for GreaterThan<T> {
    fn accepts(&self, value: &T) -> bool {
        *value > self.0
    }

    fn describe(&self) -> String {
        format!("GreaterThan: value must be > {}", self.0)
    }
}

/// Accepts values less than or equal to the bound.
#[derive(Debug, Clone)]
pub struct AtMost<T>(pub T);

impl<T: PartialOrd + Display> Validator<T> for AtMost<T> {
    fn accepts(&self, value: &T) -> bool {
        *value <= self.0
    }

    fn describe(&self) -> String {
        format!("AtMost: value must be <= {}", self.0)
    }
}

/// Accepts values greater than or equal to the bound.
#[derive(Debug, Clone)]
pub struct AtLeast<T>(pub T);

impl<T: PartialOrd + Display> Validator<T> for AtLeast<T> {
    fn accepts(&self, value: &T) -> bool {
        *value >= self.0
    }

    fn describe(&self) -> String {
        format!("AtLeast: value must be >= {}", self.0)
    }
}

/// Accepts values in the closed interval `[low, high]`.
#[derive(Debug, Clone)]
pub struct InRange<T> {
    pub low: T,
    pub high: T,
}

impl<T> InRange<T> {
    pub fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

impl<T: PartialOrd + Display> Validator<T> for InRange<T> {
    fn accepts(&self, value: &T) -> bool {
        self.low <= *value && *value <= self.high
    }

    fn describe(&self) -> String {
        format!("InRange: value must lie in [{}, {}]", self.low, self.high)
    }
}

/// Accepts one of a fixed set of values.
#[derive(Debug, Clone)]
pub struct OneOf<T>(pub Vec<T>);

impl<T: PartialEq + Debug> Validator<T> for OneOf<T> {
    fn accepts(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    fn describe(&self) -> String {
        format!("OneOf: value must be one of {:?}", self.0)
    }
}

/// A named closure.
pub struct Predicate<F> {
    label: String,
    check: F,
}

impl<F> Predicate<F> {
    pub fn new(label: impl Into<String>, check: F) -> Self {
        Self {
            label: label.into(),
            check,
        }
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Validator<T> for Predicate<F> {
    fn accepts(&self, value: &T) -> bool {
        (self.check)(value)
    }

    fn describe(&self) -> String {
        format!("Predicate: value must satisfy '{}'", self.label)
    }

    fn name(&self) -> String {
        self.label.clone()
    }
}

/// Strip module paths from a type name: `a::b::C<d::E>` becomes `C<E>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(""));
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(""));
    out
}
