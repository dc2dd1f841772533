use core::fmt;
use std::io::{self, Write};

use super::{Chart, LANES, LaneCode, Row};
use crate::DecodeError;

/// Width of one rendered row, in ASCII digits
pub const ROW_WIDTH: usize = LANES * 2;

impl Row {
    /// The ASCII digits for this row, lane 0 first.
    pub fn encode(&self) -> [u8; ROW_WIDTH] {
        let mut out = [b'0'; ROW_WIDTH];
        for (lane, code) in self.codes().iter().enumerate() {
            out[lane * 2..lane * 2 + 2].copy_from_slice(&code.digits());
        }
        out
    }

    /// Reads one rendered line back into a row.
    ///
    /// `line_no` is only used to locate errors.
    pub fn decode(line: &str, line_no: usize) -> Result<Self, DecodeError> {
        let bytes = line.as_bytes();
        if bytes.len() != ROW_WIDTH {
            return Err(DecodeError::LineLength {
                line: line_no,
                len: bytes.len(),
            });
        }

        let mut codes = [LaneCode::None; LANES];
        for (lane, pair) in bytes.chunks_exact(2).enumerate() {
            let mut value = 0u8;
            for (i, digit) in pair.iter().enumerate() {
                let bit = match digit {
                    b'0' => 0,
                    b'1' => 1,
                    _ => {
                        return Err(DecodeError::InvalidDigit {
                            line: line_no,
                            column: lane * 2 + i + 1,
                        });
                    }
                };
                value = (value << 1) | bit;
            }
            codes[lane] = LaneCode::try_from(value)
                .map_err(|_| DecodeError::ReservedCode {
                    line: line_no,
                    lane,
                })?;
        }
        Ok(Row::new(codes))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in self.codes() {
            let [hi, lo] = code.digits();
            write!(f, "{}{}", hi as char, lo as char)?;
        }
        Ok(())
    }
}

impl Chart {
    /// Writes every row as a newline-terminated line of digits.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for row in self.rows() {
            writer.write_all(&row.encode())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// The full chart as text, exactly as [`Chart::write_to`] writes it.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len() * (ROW_WIDTH + 1));
        for row in self.rows() {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        out
    }

    /// Reads chart text back into rows.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        text.lines()
            .enumerate()
            .map(|(i, line)| Row::decode(line, i + 1))
            .collect()
    }
}
