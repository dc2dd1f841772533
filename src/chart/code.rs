use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The 2-bit code the reader reserves. The encoder never produces it.
pub const RESERVED_CODE: u8 = 0b11;

#[doc = r#"
What one lane shows on one row.

Each code occupies two bits on the wire. Only three of the four values are
live; `0b11` ([`RESERVED_CODE`]) is left unused by the hardware loader and
has no variant here, so it cannot be painted.

# Example
```rust
# use midichart::prelude::*;
assert_eq!(u8::from(LaneCode::Head), 0b10);
assert_eq!(LaneCode::try_from(0b01).unwrap(), LaneCode::Tail);
assert!(LaneCode::try_from(RESERVED_CODE).is_err());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LaneCode {
    /// No note on this row
    #[default]
    None = 0b00,
    /// The note is being held
    Tail = 0b01,
    /// The first rows of a note
    Head = 0b10,
}

impl LaneCode {
    /// The two ASCII digits written for this code.
    pub const fn digits(self) -> [u8; 2] {
        match self {
            Self::None => *b"00",
            Self::Tail => *b"01",
            Self::Head => *b"10",
        }
    }
}

#[test]
fn codes_match_wire_values() {
    assert_eq!(u8::from(LaneCode::None), 0);
    assert_eq!(u8::from(LaneCode::Tail), 1);
    assert_eq!(u8::from(LaneCode::Head), 2);
    assert_eq!(LaneCode::default(), LaneCode::None);
}

#[test]
fn default_variant_is_not_a_decode_fallback() {
    assert!(LaneCode::try_from(RESERVED_CODE).is_err());
    assert!(LaneCode::try_from(0b100).is_err());
    assert_eq!(LaneCode::try_from(0b00).unwrap(), LaneCode::default());
}

#[test]
fn digits_spell_the_code_in_binary() {
    for code in [LaneCode::None, LaneCode::Tail, LaneCode::Head] {
        let digits = code.digits();
        let value = (digits[0] - b'0') * 2 + (digits[1] - b'0');
        assert_eq!(value, u8::from(code));
    }
}
