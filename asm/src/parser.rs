use arch::{comp::Comp, dest::Dest, jump::Jump};
use color_print::cformat;
use std::cell::Cell;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// One line of assembly source: the raw text, the statement parsed from
/// it, and the address/word annotations filled in by the two passes.
#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    comment: Option<String>,
    stmt: Option<Stmt>,
    pc: Cell<Option<u16>>,
    bin: Cell<Option<u16>>,
}

impl Line {
    pub fn parse(path: &str, idx: usize, raw: &str) -> (Line, Option<Error>) {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code.trim().to_string(), Some(comment.to_string())),
            None => (raw.trim().to_string(), None),
        };
        let (stmt, err) = if code.is_empty() {
            (None, None)
        } else {
            match Stmt::parse(&code) {
                Ok(stmt) => (Some(stmt), None),
                Err(err) => (Some(Stmt::Err), Some(err)),
            }
        };
        let line = Line {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            comment,
            stmt,
            pc: Cell::new(None),
            bin: Cell::new(None),
        };
        (line, err)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn no(&self) -> usize {
        self.idx + 1
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn stmt(&self) -> Option<&Stmt> {
        self.stmt.as_ref()
    }
    pub fn pc(&self) -> Option<u16> {
        self.pc.get()
    }
    pub fn bin(&self) -> Option<u16> {
        self.bin.get()
    }
    pub fn set_pc(&self, pc: u16) {
        self.pc.set(Some(pc));
    }
    pub fn set_bin(&self, bin: u16) {
        self.bin.set(Some(bin));
    }
}

impl Line {
    pub fn cformat(&self) -> String {
        let comment = match &self.comment {
            Some(s) => format!(" //{}", s),
            None => "".to_string(),
        };

        let pc = match self.pc.get() {
            Some(pc) => cformat!("<green>{:0>4X}</>", pc),
            None => " ".repeat(4),
        };

        let bin = match self.bin.get() {
            Some(bin) => format!("{:016b}", bin),
            None => " ".repeat(16),
        };

        let stmt = match &self.stmt {
            Some(stmt) => stmt.cformat(),
            None => "".to_string(),
        };

        let file = if self.no() == 1 {
            let rule = "+------+------+------------------+----------------------------+";
            format!("{}\n| {:<59} |\n{}\n", rule, self.path, rule)
        } else {
            "".to_string()
        };

        format!(
            "{}| {:>4} | {} | {} | {}{}",
            file,
            self.no(),
            pc,
            bin,
            stmt,
            comment
        )
    }
}

// ----------------------------------------------------------------------------
// Statement

/// One classified source statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Err,
    A(Ref),
    C(Dest, Comp, Jump),
    Label(String),
}

impl Stmt {
    /// Classifies one cleaned, non-blank line and extracts its fields.
    /// `@` opens an address instruction, `(` a label declaration, and
    /// everything else must be `dest=comp;jump` with dest/jump optional.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if let Some(rest) = code.strip_prefix('@') {
            return Ok(Stmt::A(Ref::parse(rest.trim())?));
        }

        if let Some(rest) = code.strip_prefix('(') {
            let name = rest
                .strip_suffix(')')
                .ok_or_else(|| Error::Malformed(code.to_string()))?
                .trim();
            check_symbol(name)?;
            return Ok(Stmt::Label(name.to_string()));
        }

        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => {
                let dest = dest.trim();
                (
                    Dest::parse(dest).map_err(|_| Error::UnknownDest(dest.to_string()))?,
                    rest,
                )
            }
            None => (Dest::Null, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => {
                let jump = jump.trim();
                (
                    comp,
                    Jump::parse(jump).map_err(|_| Error::UnknownJump(jump.to_string()))?,
                )
            }
            None => (rest, Jump::Null),
        };
        let comp = comp.trim();
        let comp = Comp::parse(comp).map_err(|_| Error::UnknownComp(comp.to_string()))?;
        Ok(Stmt::C(dest, comp, jump))
    }
}

impl Stmt {
    fn cformat(&self) -> String {
        match self {
            Stmt::Err => cformat!("<red,bold>! ERROR</>"),
            Stmt::A(Ref::Literal(val)) => cformat!("<red>@</><yellow>{}</>", val),
            Stmt::A(Ref::Symbol(name)) => cformat!("<red>@</><underline>{}</>", name),
            Stmt::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => "".to_string(),
                    dest => cformat!("<blue>{}=</>", dest),
                };
                let jump = match jump {
                    Jump::Null => "".to_string(),
                    jump => cformat!("<green>;{}</>", jump),
                };
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
            Stmt::Label(name) => cformat!("<green>({})</>", name),
        }
    }
}

// ----------------------------------------------------------------------------
// Address reference

/// The payload of an address instruction: a literal address or a symbol
/// to resolve against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    Literal(u16),
    Symbol(String),
}

impl Ref {
    fn parse(s: &str) -> Result<Ref, Error> {
        match s.chars().next() {
            Some(head) if head.is_ascii_digit() => {
                if !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::Malformed(format!("@{s}")));
                }
                match s.parse::<u32>() {
                    Ok(val) if val <= 0x7FFF => Ok(Ref::Literal(val as u16)),
                    _ => Err(Error::AddressOutOfRange(s.to_string())),
                }
            }
            _ => {
                check_symbol(s)?;
                Ok(Ref::Symbol(s.to_string()))
            }
        }
    }
}

/// Symbol names: letters, digits, `_`, `.`, `$`, `:`, not starting with
/// a digit, case-sensitive.
fn check_symbol(s: &str) -> Result<(), Error> {
    let valid = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':');
    let ok = match s.chars().next() {
        Some(head) => !head.is_ascii_digit() && s.chars().all(valid),
        None => false,
    };
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidSymbol(s.to_string()))
    }
}

// ----------------------------------------------------------------------------
