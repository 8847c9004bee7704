//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are non-negative integers allocated from monotonically
//! increasing counters. They are never reused, so an id that once named a
//! deleted cellar or bottle never names anything else.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a cellar (globally unique).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellarId(u64);

/// Identifier of a bottle (globally unique across all cellars).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BottleId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The identifier following this one, if it fits.
            pub fn next(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }

            /// Parse a path segment with `parseInt`-style leniency.
            ///
            /// Leading whitespace and one sign are skipped; a `0x`/`0X` prefix
            /// switches to hexadecimal. The leading run of digits is taken and
            /// anything after it ignored (`"12abc"` is 12, `"0x1f"` is 31, `"-0"` is 0).
            /// No digits, a negative non-zero number, or overflow yield `None`.
            pub fn parse_lenient(s: &str) -> Option<Self> {
                parse_leading_integer(s).map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid(format!("{}: not a decimal integer: {s:?}", $name)));
                }
                let value = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_u64_newtype!(CellarId, "CellarId");
impl_u64_newtype!(BottleId, "BottleId");

fn parse_leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (digits, radix) = match s.get(..2) {
        Some("0x") | Some("0X") => (&s[2..], 16),
        _ => (s, 10),
    };
    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = u64::from_str_radix(&digits[..end], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Whether the whole segment reads as a number `>= 0` under JavaScript
/// `Number()` rules: surrounding whitespace ignored, an empty string is zero,
/// decimal with optional sign, fraction and exponent, `Infinity`, or an
/// unsigned `0x`/`0o`/`0b` literal.
pub fn is_non_negative_number(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return true;
    }

    if let Some(prefix) = s.get(..2) {
        let radix = match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let digits = &s[2..];
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    if matches!(s, "Infinity" | "+Infinity") {
        return true;
    }
    if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
        return false;
    }
    s.parse::<f64>().is_ok_and(|n| n >= 0.0)
}
