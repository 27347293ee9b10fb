/// Decide whether a token should be sent as a float32.
///
/// The rule is the historical heuristic, not a float grammar: remove the
/// first `.` (if any) and the first `-` (if any) anywhere in the token, then
/// require a non-empty remainder of ASCII decimal digits. This accepts some
/// shapes a float parser rejects (`1-2`, `5-`) and rejects scientific
/// notation, leading `+`, and thousands separators.
pub(crate) fn is_numeric_literal(token: &str) -> bool {
    let mut dot_removed = false;
    let mut minus_removed = false;
    let mut digits = 0usize;

    for ch in token.chars() {
        match ch {
            '.' if !dot_removed => dot_removed = true,
            '-' if !minus_removed => minus_removed = true,
            _ if ch.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }

    digits > 0
}
