//! Form field parsing
//!
//! Calculator forms send numbers the way a browser input produces them: as
//! JSON numbers, numeric strings, partially numeric strings ("12abc") or
//! nothing at all. Anything that does not start with an integer reads as 0.

use serde::Deserializer;

/// Parse the leading integer of a form field, defaulting to 0.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Values beyond the `i32` range saturate.
pub fn parse_form_int(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = (value * 10 + i64::from(d)).min(i64::from(i32::MAX) + 1);
    }

    if !seen_digit {
        return 0;
    }
    clamp_to_i32(if negative { -value } else { value })
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Serde adapter for [`parse_form_int`] on `i32` fields.
///
/// Accepts numbers (floats are truncated toward zero), strings, and null.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct FormInt;

    impl<'de> serde::de::Visitor<'de> for FormInt {
        type Value = i32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer, a numeric string, or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(clamp_to_i32(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(i32::try_from(value).unwrap_or(i32::MAX))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value.is_nan() {
                return Ok(0);
            }
            // Truncate toward zero like the string path; `as` saturates at the i32 bounds
            Ok(value.trunc() as i32)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(parse_form_int(value))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(FormInt)
}
