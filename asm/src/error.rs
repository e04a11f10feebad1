use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Malformed statement: `{0}`")]
    Malformed(String),

    #[error("Invalid symbol name: `{0}`")]
    InvalidSymbol(String),

    #[error("Address out of range: `{0}` (addresses are 0..=32767)")]
    AddressOutOfRange(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("`{0}` is a predefined symbol")]
    ReservedSymbol(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Out of variable space: `{0}` does not fit below the screen map")]
    VariableSpace(String),

    #[error("Out of program space: instruction memory holds 32768 words")]
    ProgramSpace,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
