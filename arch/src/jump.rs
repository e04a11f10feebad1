use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Jump field of a compute instruction: the condition on the ALU output
/// under which control transfers to the address held in A.
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
    EnumString,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(disabled)]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    /// Exact-case parse; the architecture defines uppercase mnemonics only.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown jump: `{s}`")),
        }
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Jump::Null => "",
            Jump::JGT => "JGT",
            Jump::JEQ => "JEQ",
            Jump::JGE => "JGE",
            Jump::JLT => "JLT",
            Jump::JNE => "JNE",
            Jump::JLE => "JLE",
            Jump::JMP => "JMP",
        };
        write!(f, "{s}")
    }
}
