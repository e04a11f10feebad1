use color_print::cprintln;

use crate::parser::Line;

// ----------------------------------------------------------------------------
// Message

/// A diagnostic tied to one source line.
#[derive(Debug)]
pub enum Msg {
    Error { text: String, line: Line },
    Note { text: String, line: Line },
}

impl Msg {
    pub fn print(&self) {
        let line = match self {
            Msg::Error { text, line } => {
                cprintln!("<red,bold>error</>: {}", text);
                line
            }
            Msg::Note { text, line } => {
                cprintln!("<green,bold>note</>: {}", text);
                line
            }
        };
        cprintln!("     <blue>--></> <underline>{}:{}</>", line.path(), line.no());
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line.no(), line.raw());
        cprintln!("      <blue>|</>");
    }
}

// ----------------------------------------------------------------------------
// Collector

#[derive(Debug)]
pub struct Msgs(Vec<Msg>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(vec![])
    }

    pub fn error(&mut self, text: String, line: Line) {
        self.0.push(Msg::Error { text, line });
    }

    pub fn note(&mut self, text: String, line: Line) {
        self.0.push(Msg::Note { text, line });
    }

    pub fn extend(&mut self, other: Msgs) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|msg| matches!(msg, Msg::Error { .. }))
    }

    pub fn error_count(&self) -> usize {
        self.0
            .iter()
            .filter(|msg| matches!(msg, Msg::Error { .. }))
            .count()
    }

    pub fn print(&self) {
        for msg in &self.0 {
            msg.print();
        }
    }
}
