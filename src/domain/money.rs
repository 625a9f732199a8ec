//! Money amounts as submitted by clients.
//!
//! Requests may carry an amount as a JSON string or a JSON number. The
//! submitted text is kept verbatim until it has been checked, so digit limits
//! are applied to what the client sent rather than to a rounded value.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// A money amount exactly as it appeared in the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `(total digits, decimal places)` of a plain decimal number, counted
    /// like a decimal tuple: leading zeros are dropped, trailing zeros kept.
    /// `None` when the text is not a number.
    pub fn digits(&self) -> Option<(u32, u32)> {
        let (_, whole, fraction) = self.parts()?;
        let significant = format!("{}{}", whole, fraction);
        let significant = significant.trim_start_matches('0').len().max(1) as u32;
        let decimals = fraction.len() as u32;
        Some((significant.max(decimals), decimals))
    }

    /// Exact value, or `None` when the text is not a number or does not fit
    /// a `Decimal` without rounding.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let (negative, whole, fraction) = self.parts()?;
        let mut text = String::with_capacity(whole.len() + fraction.len() + 3);
        if negative {
            text.push('-');
        }
        text.push_str(if whole.is_empty() { "0" } else { whole });
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }

        let mut value = Decimal::from_str_exact(&text).ok()?;
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Some(value)
    }

    /// Sign, whole digits and fraction digits of `[+-]digits[.digits]`.
    fn parts(&self) -> Option<(bool, &str, &str)> {
        let text = self.0.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return None;
        }
        Some((negative, whole, fraction))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number or a string holding one")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                Ok(Amount::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                Ok(Amount::new(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount::new(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                Ok(Amount::new(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Amount, E> {
                Ok(Amount::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
