use crate::{comp::Comp, dest::Dest, jump::Jump};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One machine word of the architecture.
///
/// `A` loads a 15-bit constant into the address register. `C` is the
/// compute form: ALU operation, destination set, jump condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inst {
    A(u16),
    C(Dest, Comp, Jump),
}

// ----------------------------------------------------------------------------

impl Inst {
    /// Packs the instruction into its 16-bit word.
    ///
    /// A form: `0` + 15-bit value. C form: `111` + 7-bit computation +
    /// 3-bit destination + 3-bit jump.
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(addr) => addr & 0x7FFF,
            Inst::C(dest, comp, jump) => {
                0b111 << 13
                    | (u8::from(comp) as u16) << 6
                    | (u8::from(dest) as u16) << 3
                    | u8::from(jump) as u16
            }
        }
    }

    /// Decodes a 16-bit word back into an instruction.
    pub fn from_bin(bin: u16) -> Result<Inst, String> {
        if bin & 0x8000 == 0 {
            return Ok(Inst::A(bin));
        }
        if bin >> 13 != 0b111 {
            return Err(format!("Unknown instruction word: {bin:#018b}"));
        }
        let comp = Comp::try_from(((bin >> 6) & 0b111_1111) as u8)
            .map_err(|_| format!("Unknown computation code in word: {bin:#018b}"))?;
        let dest = Dest::try_from(((bin >> 3) & 0b111) as u8)
            .map_err(|_| format!("Unknown destination code in word: {bin:#018b}"))?;
        let jump = Jump::try_from((bin & 0b111) as u8)
            .map_err(|_| format!("Unknown jump code in word: {bin:#018b}"))?;
        Ok(Inst::C(dest, comp, jump))
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Inst::A(addr) => write!(f, "@{addr}"),
            Inst::C(dest, comp, jump) => {
                if dest != Dest::Null {
                    write!(f, "{dest}=")?;
                }
                write!(f, "{comp}")?;
                if jump != Jump::Null {
                    write!(f, ";{jump}")?;
                }
                Ok(())
            }
        }
    }
}

// ----------------------------------------------------------------------------
