use tabmarquee_domain::MarqueeText;

/// Rotation index into a marquee, wrapping at the text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    index: usize,
    len: usize,
}

impl RotationCursor {
    /// Starts at 0. `MarqueeText` is never empty, so `len` is non-zero.
    pub fn new(text: &MarqueeText) -> Self {
        Self {
            index: 0,
            len: text.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn starts_at_zero() {
        let text = MarqueeText::new("abcde").unwrap();

        assert_eq!(RotationCursor::new(&text).index(), 0);
    }

    #[rstest]
    #[case(1, 1, 0)]
    #[case(2, 1, 1)]
    #[case(2, 2, 0)]
    #[case(50, 49, 49)]
    #[case(50, 50, 0)]
    #[case(50, 51, 1)]
    fn advance_wraps_at_len(#[case] len: usize, #[case] steps: usize, #[case] expected: usize) {
        let text = MarqueeText::new(&"x".repeat(len)).unwrap();
        let mut cursor = RotationCursor::new(&text);

        for _ in 0..steps {
            cursor.advance();
        }

        assert_eq!(cursor.index(), expected);
    }

    #[test]
    fn length_counts_code_units() {
        let text = MarqueeText::new("a\u{1f600}").unwrap();
        let mut cursor = RotationCursor::new(&text);

        for _ in 0..3 {
            cursor.advance();
        }

        assert_eq!(cursor.index(), 0);
    }
}
