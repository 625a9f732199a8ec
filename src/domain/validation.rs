//! Field rules shared by the Market, Seller and Product commands.
//!
//! Every rule returns the complete list of problems it found instead of
//! stopping at the first one, so a caller can report all of them in a single
//! response. Results are collected into [`Violations`], keyed by field name.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use super::money::Amount;
use super::DomainError;

/// Characters a market location may not contain (case-sensitive).
pub const FORBIDDEN_LOCATION_CHARS: [char; 2] = ['X', 'Y'];

/// Total digits allowed for a market's net worth.
pub const NET_WORTH_MAX_DIGITS: u32 = 100;
/// Total digits allowed for a product price.
pub const PRICE_MAX_DIGITS: u32 = 50;
/// Decimal places allowed for every money column.
pub const MONEY_DECIMAL_PLACES: u32 = 2;
/// Digits a stored amount can always hold without rounding.
pub const STORABLE_DIGITS: u32 = 28;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_NUMBER: &str = "A valid number is required.";
pub const MARKETS_NOT_FOUND: &str = "One or more Market-Ids not found";
pub const MARKET_NOT_FOUND: &str = "Market not found";
pub const SELLER_NOT_FOUND: &str = "Seller not found";

// ── Violations ─────────────────────────────────────────────────

/// Accumulated validation problems: field name → human-readable messages.
///
/// Serializes as a plain JSON object, e.g.
/// `{"location": ["Please No X in location", "Please No Y in location"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<String, Vec<String>>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Violations from a single field and message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut violations = Self::new();
        violations.add(field, message);
        violations
    }

    /// Collect the outcome of a `validator::Validate::validate()` call.
    pub fn collect(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::new(),
            Err(errors) => errors.into(),
        }
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Append every message for `field`. Empty input leaves the map untouched.
    pub fn extend(&mut self, field: &str, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        self.0.entry(field.to_string()).or_default().extend(messages);
    }

    pub fn merge(&mut self, other: Violations) {
        for (field, messages) in other.0 {
            self.extend(&field, messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field` (empty when the field is clean).
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error
    /// carrying every violation.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for Violations {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Violations::new();
        for (field, errs) in errors.field_errors() {
            for e in errs.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                violations.add(field.to_string(), message);
            }
        }
        violations
    }
}

// ── Rules ──────────────────────────────────────────────────────

/// Check a market location for forbidden characters.
///
/// Returns one message per forbidden character present, so `"aXbY"` yields
/// both the `X` and the `Y` violation.
pub fn validate_location(location: &str) -> Vec<String> {
    FORBIDDEN_LOCATION_CHARS
        .iter()
        .filter(|c| location.contains(**c))
        .map(|c| format!("Please No {} in location", c))
        .collect()
}

/// Check that an amount is a number within the given precision and scale.
///
/// Digit counting follows the usual decimal-tuple rules: `10.00` has four
/// digits, two of them after the point; `0.05` has two digits, both after
/// the point. Amounts inside the bounds that still exceed what can be
/// stored exactly are rejected as well.
pub fn validate_decimal(value: &Amount, max_digits: u32, decimal_places: u32) -> Vec<String> {
    let Some((total_digits, decimals)) = value.digits() else {
        return vec![INVALID_NUMBER.to_string()];
    };
    let whole_digits = total_digits - decimals;
    let max_whole_digits = max_digits.saturating_sub(decimal_places);

    if total_digits > max_digits {
        vec![too_many_digits(max_digits)]
    } else if decimals > decimal_places {
        vec![format!(
            "Ensure that there are no more than {} decimal places.",
            decimal_places
        )]
    } else if whole_digits > max_whole_digits {
        vec![format!(
            "Ensure that there are no more than {} digits before the decimal point.",
            max_whole_digits
        )]
    } else if value.to_decimal().is_none() {
        vec![too_many_digits(STORABLE_DIGITS)]
    } else {
        Vec::new()
    }
}

fn too_many_digits(max: u32) -> String {
    format!("Ensure that there are no more than {} digits in total.", max)
}

/// `validator` custom rule: text must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed(BLANK));
        return Err(err);
    }
    Ok(())
}

/// Unwrap a required field, recording a violation when it is missing.
pub fn require<T>(violations: &mut Violations, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        violations.add(field, REQUIRED);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Amount {
        Amount::new(s)
    }

    #[test]
    fn clean_location_has_no_violations() {
        assert!(validate_location("abc").is_empty());
        assert!(validate_location("").is_empty());
    }

    #[test]
    fn location_check_is_case_sensitive() {
        assert!(validate_location("xylophone").is_empty());
    }

    #[test]
    fn location_reports_x() {
        assert_eq!(validate_location("aXc"), vec!["Please No X in location"]);
    }

    #[test]
    fn location_reports_both_x_and_y() {
        let violations = validate_location("XY Street");
        assert_eq!(
            violations,
            vec!["Please No X in location", "Please No Y in location"]
        );
    }

    #[test]
    fn decimal_within_bounds_is_accepted() {
        assert!(validate_decimal(&dec("10.00"), 100, 2).is_empty());
        assert!(validate_decimal(&dec("0.05"), 50, 2).is_empty());
        assert!(validate_decimal(&dec("-12345.6"), 50, 2).is_empty());
    }

    #[test]
    fn decimal_with_too_many_places_is_rejected() {
        assert_eq!(
            validate_decimal(&dec("1.234"), 50, 2),
            vec!["Ensure that there are no more than 2 decimal places."]
        );
    }

    #[test]
    fn decimal_with_too_many_digits_is_rejected() {
        assert_eq!(
            validate_decimal(&dec("123456.00"), 5, 2),
            vec!["Ensure that there are no more than 5 digits in total."]
        );
    }

    #[test]
    fn decimal_with_too_many_whole_digits_is_rejected() {
        assert_eq!(
            validate_decimal(&dec("1234"), 5, 2),
            vec!["Ensure that there are no more than 3 digits before the decimal point."]
        );
    }

    #[test]
    fn decimal_that_is_not_a_number_is_rejected() {
        assert_eq!(validate_decimal(&dec("ten"), 50, 2), vec![INVALID_NUMBER]);
    }

    #[test]
    fn decimal_at_the_digit_bound_reports_the_bound() {
        let hundred = format!("{}.00", "9".repeat(98));
        let hundred_and_one = format!("{}.00", "9".repeat(99));
        assert_eq!(
            validate_decimal(&dec(&hundred_and_one), NET_WORTH_MAX_DIGITS, 2),
            vec!["Ensure that there are no more than 100 digits in total."]
        );
        assert_eq!(
            validate_decimal(&dec(&hundred), NET_WORTH_MAX_DIGITS, 2),
            vec!["Ensure that there are no more than 28 digits in total."]
        );
    }

    #[test]
    fn decimal_that_fits_storage_is_accepted() {
        assert!(validate_decimal(&dec("12345678901234567890123456.99"), 100, 2).is_empty());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(not_blank("  ").is_err());
        assert!(not_blank("Main St").is_ok());
    }

    #[test]
    fn violations_merge_keeps_every_message() {
        let mut a = Violations::single("location", "Please No X in location");
        let mut b = Violations::new();
        b.add("location", "Please No Y in location");
        b.add("name", REQUIRED);
        b.extend("description", Vec::new());
        a.merge(b);

        assert_eq!(a.field("location").len(), 2);
        assert_eq!(a.field("name"), [REQUIRED.to_string()]);
        assert!(a.field("description").is_empty());
        assert_eq!(a.fields().collect::<Vec<_>>(), vec!["location", "name"]);
    }

    #[test]
    fn violations_serialize_as_field_map() {
        let v = Violations::single("markets", MARKETS_NOT_FOUND);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"markets": ["One or more Market-Ids not found"]})
        );
    }

    #[test]
    fn empty_violations_convert_to_ok() {
        assert!(Violations::new().into_result().is_ok());
        assert!(Violations::single("name", BLANK).into_result().is_err());
    }
}
