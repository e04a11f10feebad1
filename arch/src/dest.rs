use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Destination field of a compute instruction: the set of registers that
/// receive the ALU output. Bit 2 writes A, bit 1 writes D, bit 0 writes M.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    const BIT_A: u8 = 0b100;
    const BIT_D: u8 = 0b010;
    const BIT_M: u8 = 0b001;

    /// Parses a destination mnemonic as a set of registers, so letter
    /// order does not matter: `DM` names the same destination as `MD`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut bits: u8 = 0;
        for c in s.chars() {
            let bit = match c {
                'A' => Self::BIT_A,
                'D' => Self::BIT_D,
                'M' => Self::BIT_M,
                _ => return Err(format!("Unknown destination: `{s}`")),
            };
            if bits & bit != 0 {
                return Err(format!("Duplicate destination register: `{s}`"));
            }
            bits |= bit;
        }
        match bits {
            0b001 => Ok(Dest::M),
            0b010 => Ok(Dest::D),
            0b011 => Ok(Dest::MD),
            0b100 => Ok(Dest::A),
            0b101 => Ok(Dest::AM),
            0b110 => Ok(Dest::AD),
            0b111 => Ok(Dest::AMD),
            _ => Err(format!("Empty destination: `{s}`")),
        }
    }
}
