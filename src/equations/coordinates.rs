use crate::error::{Result, TransformError};

fn invalid(input: &str, reason: String) -> TransformError {
    log::warn!("error converting latitude/longitude '{input}': {reason}");
    TransformError::parse(input, reason)
}

/// Converts `"ddd mm.mm H"` (degrees, decimal minutes, hemisphere) to signed
/// decimal degrees. Southern and western hemispheres are negative; the
/// hemisphere letter is case-insensitive.
///
/// ```rust
/// assert!((ctd_rs::parse_coordinate("122 30.5 W").unwrap() + 122.508333).abs() < 1e-6);
/// ```
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [degrees, minutes, hemisphere] = tokens.as_slice() else {
        return Err(invalid(
            text,
            format!("expected 3 tokens (degrees minutes hemisphere), found {}", tokens.len()),
        ));
    };

    let negative = match hemisphere.to_ascii_uppercase().as_str() {
        "N" | "E" => false,
        "S" | "W" => true,
        other => return Err(invalid(text, format!("unknown hemisphere '{other}'"))),
    };

    let degrees: f64 = degrees
        .parse()
        .map_err(|e| invalid(text, format!("degrees '{degrees}': {e}")))?;
    let minutes: f64 = minutes
        .parse()
        .map_err(|e| invalid(text, format!("minutes '{minutes}': {e}")))?;

    let value = degrees + minutes / 60.0;
    if !value.is_finite() {
        return Err(invalid(text, format!("value {value} is not finite")));
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hemispheres_set_sign() {
        assert_abs_diff_eq!(parse_coordinate("35 48.05 N").unwrap(), 35.80083333333333, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_coordinate("35 48.05 s").unwrap(), -35.80083333333333, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_coordinate("122 30.5 e").unwrap(), 122.50833333333334, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_coordinate(" 122 30.5 W ").unwrap(), -122.50833333333334, epsilon = 1e-12);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        for text in ["", "35 48.05", "35 48.05 N extra", "35 48.05 Q", "3x 48.05 N", "35 four N"] {
            let err = parse_coordinate(text).unwrap_err();
            assert_eq!(err.kind(), FailureKind::Parse, "input {text:?}");
        }
    }
}
