//! Lenient numeric parsing
//!
//! Host parameters are short decimal strings typed by people or sent by
//! simple apps. A malformed number degrades to zero instead of failing.

/// Parse a leading decimal integer
///
/// Skips leading ASCII whitespace, accepts one optional `+`/`-` sign, then
/// reads digits up to the first non-digit. Returns 0 when no digit follows.
/// Values outside `i32` saturate.
pub fn parse_lenient_i32(bytes: &[u8]) -> i32 {
    let mut rest = bytes;
    while let [first, tail @ ..] = rest {
        if first.is_ascii_whitespace() {
            rest = tail;
        } else {
            break;
        }
    }

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let mut value: i32 = 0;
    for &byte in rest.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = (byte - b'0') as i32;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
