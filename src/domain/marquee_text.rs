//! The text scrolled through the title slot and its left rotation.
//!
//! Rotation works on UTF-16 code units, the indexing granularity of the
//! title hosts this marquee targets. For BMP-only text (the shipped base
//! string) that is the same as rotating by `char`.

use thiserror::Error;

/// "Uniwrap – Nền tảng tạo form khảo sát chuyên nghiệp", NFC, 50 code units.
pub const BASE_TITLE: &str = "Uniwrap \u{2013} N\u{1ec1}n t\u{1ea3}ng t\u{1ea1}o form kh\u{1ea3}o s\u{e1}t chuy\u{ea}n nghi\u{1ec7}p";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarqueeTextError {
    #[error("marquee text must not be empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeText {
    units: Vec<u16>,
}

impl MarqueeText {
    pub fn new(text: &str) -> Result<Self, MarqueeTextError> {
        let units: Vec<u16> = text.encode_utf16().collect();
        if units.is_empty() {
            return Err(MarqueeTextError::Empty);
        }
        Ok(Self { units })
    }

    pub fn base() -> Self {
        Self {
            units: BASE_TITLE.encode_utf16().collect(),
        }
    }

    /// Number of UTF-16 code units. Never zero.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Left rotation by `offset` code units, `text[offset..] + text[..offset]`.
    ///
    /// `offset` wraps at `len()`. A split surrogate pair decodes to U+FFFD.
    pub fn rotate(&self, offset: usize) -> String {
        let split = offset % self.units.len();
        let (head, tail) = self.units.split_at(split);
        let rotated: Vec<u16> = tail.iter().chain(head).copied().collect();
        String::from_utf16_lossy(&rotated)
    }

    pub fn as_string(&self) -> String {
        self.rotate(0)
    }
}
