use super::layout;

/// Byte-buffer builder owning the OSC alignment conventions.
///
/// Encoders never touch padding arithmetic directly; the two string
/// disciplines live here. `put_padded_str` pads to the next multiple of 4
/// without guaranteeing a terminator (zero pad bytes when already aligned);
/// `put_terminated_str` always appends at least one NUL before padding.
pub struct OscWriter {
    buf: Vec<u8>,
}

impl OscWriter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// UTF-8 bytes of `value`, then `(4 - len % 4) % 4` NUL pad bytes.
    pub fn put_padded_str(&mut self, value: &str) {
        self.buf.extend_from_slice(value.as_bytes());
        self.pad_to_alignment();
    }

    /// UTF-8 bytes of `value`, one NUL terminator, then NUL pad bytes to the
    /// next multiple of 4.
    pub fn put_terminated_str(&mut self, value: &str) {
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.push(0);
        self.pad_to_alignment();
    }

    /// IEEE-754 big-endian, exactly 4 bytes.
    pub fn put_f32_be(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn pad_to_alignment(&mut self) {
        let pad = (layout::ALIGN - self.buf.len() % layout::ALIGN) % layout::ALIGN;
        self.buf.extend(std::iter::repeat_n(0u8, pad));
    }
}

impl Default for OscWriter {
    fn default() -> Self {
        Self::new()
    }
}
