use super::classify::is_numeric_literal;
use super::error::EncodeError;
use super::layout;
use super::writer::OscWriter;

/// A typed OSC argument. Only the float32/string subset is supported.
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    Float(f32),
    Str(String),
}

/// String framing discipline for the address and type-tag segments.
///
/// `Compat` reproduces the historical sender byte-for-byte: segments whose
/// length is already a multiple of 4 receive no NUL terminator. `Strict`
/// follows OSC 1.0, which requires at least one NUL before padding. String
/// arguments are always terminated in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    #[default]
    Compat,
    Strict,
}

/// Classify a raw token into a typed argument.
///
/// Numeric-looking tokens (see `classify`) are parsed as float32; a token
/// that looks numeric but does not parse is the only failure path. Anything
/// else is passed through as a string, verbatim.
pub fn classify_token(token: &str) -> Result<OscArg, EncodeError> {
    if is_numeric_literal(token) {
        let value = token
            .parse::<f32>()
            .map_err(|_| EncodeError::InvalidFloat {
                token: token.to_string(),
            })?;
        return Ok(OscArg::Float(value));
    }
    Ok(OscArg::Str(token.to_string()))
}

/// Build the comma-prefixed type-tag string for `args`, one tag per
/// argument in order.
pub fn type_tags(args: &[OscArg]) -> String {
    let mut tags = String::with_capacity(1 + args.len());
    tags.push(layout::TYPE_TAG_PREFIX);
    for arg in args {
        tags.push(match arg {
            OscArg::Float(_) => layout::TAG_FLOAT,
            OscArg::Str(_) => layout::TAG_STRING,
        });
    }
    tags
}

/// Encode an OSC message from typed arguments.
///
/// Pure and deterministic: the same inputs always produce identical bytes.
/// Layout is `address ++ type tags ++ arguments`, each segment padded to a
/// multiple of 4; no length prefix, no checksum.
pub fn encode_message(address: &str, args: &[OscArg], framing: Framing) -> Vec<u8> {
    let mut writer = OscWriter::new();

    put_segment_str(&mut writer, address, framing);
    put_segment_str(&mut writer, &type_tags(args), framing);

    for arg in args {
        match arg {
            OscArg::Float(value) => writer.put_f32_be(*value),
            OscArg::Str(text) => writer.put_terminated_str(text),
        }
    }

    writer.into_bytes()
}

/// Classify every token, then encode. The first unparseable numeric token
/// aborts the whole message.
pub fn encode_tokens<S: AsRef<str>>(
    address: &str,
    tokens: &[S],
    framing: Framing,
) -> Result<Vec<u8>, EncodeError> {
    let args = tokens
        .iter()
        .map(|token| classify_token(token.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encode_message(address, &args, framing))
}

fn put_segment_str(writer: &mut OscWriter, value: &str, framing: Framing) {
    match framing {
        Framing::Compat => writer.put_padded_str(value),
        Framing::Strict => writer.put_terminated_str(value),
    }
}
