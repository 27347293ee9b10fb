//! OSC 1.0 message encoding (float32/string subset).
//!
//! Layered structure:
//! - `layout`: wire constants (alignment, tag characters)
//! - `writer`: byte building and the two padding disciplines
//! - `classify`: the numeric-literal heuristic
//! - `encoder`: domain-level assembly (no direct byte arithmetic)
//! - `error`: explicit, actionable errors
//!
//! Encoding is pure and contains no I/O; the UDP transport lives in `net`.

mod classify;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod writer;

pub use encoder::{Framing, OscArg, classify_token, encode_message, encode_tokens, type_tags};
pub use error::EncodeError;
