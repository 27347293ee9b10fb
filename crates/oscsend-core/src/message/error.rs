use thiserror::Error;

/// Errors returned by message encoding.
///
/// Encoding itself cannot fail; the only failure is a token that passes the
/// numeric-shape heuristic but does not parse as a float32 (e.g. `1-2`).
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("token looks numeric but is not a valid float: '{token}'")]
    InvalidFloat { token: String },
}
