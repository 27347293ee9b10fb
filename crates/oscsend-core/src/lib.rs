//! oscsend core library: OSC 1.0 message encoding and one-shot UDP send.
//!
//! This crate implements the encoding pipeline used by the CLI: command-line
//! tokens are classified into typed arguments (float32 or string), assembled
//! into an OSC message (address, type tags, payloads, each segment padded to
//! a 4-byte boundary), and handed to a scoped UDP socket. Encoding is
//! byte-oriented and side-effect free; all I/O is isolated in `net`. Wire
//! conventions are captured in the writer so the encoder stays minimal.
//!
//! Invariants:
//! - Encoding is deterministic: identical inputs produce identical bytes.
//! - Every message segment length is a multiple of 4; float payloads are
//!   exactly 4 bytes, big-endian.
//! - String arguments always carry a NUL terminator. Address and type-tag
//!   segments carry one under [`Framing::Strict`]; [`Framing::Compat`]
//!   omits it when the segment is already aligned, matching the historical
//!   sender byte-for-byte.
//!
//! Version française (résumé):
//! Cette crate encode des messages OSC 1.0 (sous-ensemble float32/chaîne) et
//! les envoie en un seul datagramme UDP. L'encodage est pur et déterministe;
//! les E/S restent dans `net`. Deux cadrages de chaîne: `Compat` (fidèle à
//! l'outil d'origine) et `Strict` (conforme OSC 1.0).
//!
//! # Examples
//! ```
//! use oscsend_core::{Framing, encode_tokens};
//!
//! let bytes = encode_tokens("/vol", &["0.5"], Framing::Compat)?;
//! assert_eq!(bytes.len() % 4, 0);
//! # Ok::<(), oscsend_core::EncodeError>(())
//! ```

mod message;
pub mod net;

pub use message::{
    EncodeError, Framing, OscArg, classify_token, encode_message, encode_tokens, type_tags,
};
pub use net::{SendError, send_message};

/// Default destination host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default destination UDP port.
pub const DEFAULT_PORT: u16 = 57121;
