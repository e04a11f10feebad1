use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Computation field of a compute instruction. The discriminant is the
/// 7-bit `a c1..c6` code: the high bit selects M over A as the ALU's
/// second operand, the low six drive the ALU control lines.
///
/// | code      | mnemonics       | code      | mnemonics       |
/// |-----------|-----------------|-----------|-----------------|
/// | `0101010` | `0`             | `0000010` | `D+A`           |
/// | `0111111` | `1`             | `1000010` | `D+M`           |
/// | `0111010` | `-1`            | `0010011` | `D-A`           |
/// | `0001100` | `D`             | `1010011` | `D-M`           |
/// | `0110000` | `A`             | `0000111` | `A-D`           |
/// | `1110000` | `M`             | `1000111` | `M-D`           |
/// | `0001101` | `!D`            | `0000000` | `D&A`           |
/// | `0110001` | `!A`            | `1000000` | `D&M`           |
/// | `1110001` | `!M`            | `0010101` | `D\|A`          |
/// | `0001111` | `-D`            | `1000101` | `D\|M`          |
/// | `0110011` | `-A`            | `0011111` | `D+1`           |
/// | `1110011` | `-M`            | `0110111` | `A+1`           |
/// | `0001110` | `D-1`           | `1110111` | `M+1`           |
/// | `0110010` | `A-1`           | `1110010` | `M-1`           |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b0101010,
    #[strum(serialize = "1")]
    One = 0b0111111,
    #[strum(serialize = "-1")]
    NegOne = 0b0111010,
    #[strum(serialize = "D")]
    D = 0b0001100,
    #[strum(serialize = "A")]
    A = 0b0110000,
    #[strum(serialize = "M")]
    M = 0b1110000,
    #[strum(serialize = "!D")]
    NotD = 0b0001101,
    #[strum(serialize = "!A")]
    NotA = 0b0110001,
    #[strum(serialize = "!M")]
    NotM = 0b1110001,
    #[strum(serialize = "-D")]
    NegD = 0b0001111,
    #[strum(serialize = "-A")]
    NegA = 0b0110011,
    #[strum(serialize = "-M")]
    NegM = 0b1110011,
    #[strum(serialize = "D+1")]
    DPlusOne = 0b0011111,
    #[strum(serialize = "A+1")]
    APlusOne = 0b0110111,
    #[strum(serialize = "M+1")]
    MPlusOne = 0b1110111,
    #[strum(serialize = "D-1")]
    DMinusOne = 0b0001110,
    #[strum(serialize = "A-1")]
    AMinusOne = 0b0110010,
    #[strum(serialize = "M-1")]
    MMinusOne = 0b1110010,
    #[strum(serialize = "D+A")]
    DPlusA = 0b0000010,
    #[strum(serialize = "D+M")]
    DPlusM = 0b1000010,
    #[strum(serialize = "D-A")]
    DMinusA = 0b0010011,
    #[strum(serialize = "D-M")]
    DMinusM = 0b1010011,
    #[strum(serialize = "A-D")]
    AMinusD = 0b0000111,
    #[strum(serialize = "M-D")]
    MMinusD = 0b1000111,
    #[strum(serialize = "D&A")]
    DAndA = 0b0000000,
    #[strum(serialize = "D&M")]
    DAndM = 0b1000000,
    #[strum(serialize = "D|A")]
    DOrA = 0b0010101,
    #[strum(serialize = "D|M")]
    DOrM = 0b1000101,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown computation: `{s}`")),
        }
    }
}
