mod assemble;
mod error;
mod msg;
mod parser;
mod symbols;

pub use assemble::{assemble, collect_labels, format_words, generate, parse};
pub use error::Error;
pub use msg::{Msg, Msgs};
pub use parser::{Line, Ref, Stmt};
pub use symbols::SymbolTable;
