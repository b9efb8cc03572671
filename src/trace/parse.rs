//! Comma-separated array input.

use tracing::debug;

use super::error::TraceError;

/// Parse a comma-separated list of integers such as `"64, 34, 25"`.
///
/// Each token contributes its leading integer (`"12abc"` reads as 12,
/// `"3.7"` as 3). Tokens without one are skipped.
///
/// # Errors
/// Returns [`TraceError::NoValidNumbers`] when no token yields a number.
pub fn parse_array(input: &str) -> Result<Vec<i64>, TraceError> {
    let numbers: Vec<i64> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let Some(digits) = leading_digits(token) else {
                debug!(token, "ignoring non-numeric token");
                return None;
            };
            match digits.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    debug!(token, "ignoring out-of-range token");
                    None
                }
            }
        })
        .collect();

    if numbers.is_empty() {
        return Err(TraceError::NoValidNumbers {
            input: input.trim().to_string(),
        });
    }
    Ok(numbers)
}

/// Optional sign followed by at least one ASCII digit, at the start of `token`.
fn leading_digits(token: &str) -> Option<&str> {
    let digits_start = usize::from(token.starts_with(['-', '+']));
    let digits_len = token[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    Some(&token[..digits_start + digits_len])
}
