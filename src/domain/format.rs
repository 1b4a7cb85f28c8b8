use serde_json::Value;

/// Text decoration bitmask carried by `text` nodes.
///
/// Only the four lowest bits are meaningful; anything above them is dropped
/// on construction so newer editor flags do not leak into rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextFormat(u8);

impl TextFormat {
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 2);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 3);

    const KNOWN_BITS: u64 = 0b1111;

    pub const fn empty() -> Self {
        TextFormat(0)
    }

    pub fn from_bits(bits: u64) -> Self {
        TextFormat((bits & Self::KNOWN_BITS) as u8)
    }

    /// Read the `format` field. Negative, fractional and non-numeric values
    /// carry no decoration.
    pub fn from_value(value: Option<&Value>) -> Self {
        let bits = match value {
            Some(Value::Number(number)) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|float| *float >= 0.0 && float.fract() == 0.0)
                    .map(|float| float as u64)
            }),
            _ => None,
        };
        Self::from_bits(bits.unwrap_or(0))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: TextFormat) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: Self) -> Self::Output {
        TextFormat(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_bits_are_ignored() {
        let format = TextFormat::from_bits(0b1_0000_0011);
        assert_eq!(format, TextFormat::BOLD | TextFormat::ITALIC);
        assert!(!format.contains(TextFormat::UNDERLINE));
    }

    #[test]
    fn reads_numeric_field_only() {
        assert_eq!(
            TextFormat::from_value(Some(&json!(9))),
            TextFormat::BOLD | TextFormat::UNDERLINE
        );
        assert_eq!(
            TextFormat::from_value(Some(&json!(4.0))),
            TextFormat::STRIKETHROUGH
        );
        assert!(TextFormat::from_value(Some(&json!(-1))).is_empty());
        assert!(TextFormat::from_value(Some(&json!(1.5))).is_empty());
        assert!(TextFormat::from_value(Some(&json!("left"))).is_empty());
        assert!(TextFormat::from_value(None).is_empty());
    }
}
