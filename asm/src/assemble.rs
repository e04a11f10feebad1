use arch::inst::Inst;
use indexmap::IndexMap;

use crate::error::Error;
use crate::msg::Msgs;
use crate::parser::{Line, Ref, Stmt};
use crate::symbols::SymbolTable;

/// One past the last ROM address. The counter may reach it; no
/// instruction or resolved code address may.
const ROM_LIMIT: u16 = 0x8000;

// ----------------------------------------------------------------------------
// Parse

/// Splits one source unit into parsed lines. The returned messages carry
/// every line that failed to parse.
pub fn parse(path: &str, src: &str) -> (Vec<Line>, Msgs) {
    let mut lines = vec![];
    let mut msgs = Msgs::new();
    for (idx, raw) in src.lines().enumerate() {
        let (line, err) = Line::parse(path, idx, raw);
        if let Some(err) = err {
            msgs.error(err.to_string(), line.clone());
        }
        lines.push(line);
    }
    (lines, msgs)
}

// ----------------------------------------------------------------------------
// Pass 1

/// First pass: walk the lines with the ROM counter and bind each label
/// to the address of the instruction that follows it. Only address and
/// compute statements advance the counter; an instruction past the last
/// ROM address is an error, reported once for the run.
pub fn collect_labels(lines: &[Line], table: &mut SymbolTable) -> Msgs {
    let mut msgs = Msgs::new();
    let mut defined: IndexMap<String, Line> = IndexMap::new();
    let mut pc: u16 = 0;
    let mut rom_full = false;
    for line in lines {
        match line.stmt() {
            Some(Stmt::Label(name)) => match table.bind(name, pc) {
                Ok(()) => {
                    defined.insert(name.clone(), line.clone());
                }
                Err(err) => {
                    msgs.error(err.to_string(), line.clone());
                    if let Some(prev) = defined.get(name) {
                        msgs.note(format!("`{}` is first declared here", name), prev.clone());
                    }
                }
            },
            Some(Stmt::A(_)) | Some(Stmt::C(..)) => {
                if pc >= ROM_LIMIT {
                    // one report covers every instruction past the end
                    if !rom_full {
                        msgs.error(Error::ProgramSpace.to_string(), line.clone());
                        rom_full = true;
                    }
                    continue;
                }
                line.set_pc(pc);
                pc += 1;
            }
            Some(Stmt::Err) | None => {}
        }
    }
    msgs
}

// ----------------------------------------------------------------------------
// Pass 2

/// Second pass: resolve every address reference and encode one word per
/// real instruction, in source order. Symbols still unbound here are
/// variables and get the next free RAM slot on first reference. A bound
/// address past the ROM range cannot encode in 15 bits and is an error.
pub fn generate(lines: &[Line], table: &mut SymbolTable) -> (Vec<u16>, Msgs) {
    let mut words = vec![];
    let mut msgs = Msgs::new();
    for line in lines {
        let inst = match line.stmt() {
            Some(Stmt::A(Ref::Literal(val))) => Inst::A(*val),
            Some(Stmt::A(Ref::Symbol(name))) => {
                let addr = if table.contains(name) {
                    table.resolve(name)
                } else {
                    match table.allocate(name) {
                        Ok(addr) => Some(addr),
                        Err(err) => {
                            msgs.error(err.to_string(), line.clone());
                            continue;
                        }
                    }
                };
                match addr {
                    // a label declared one past a full ROM resolves here
                    Some(addr) if addr >= ROM_LIMIT => {
                        let err = Error::AddressOutOfRange(name.clone());
                        msgs.error(err.to_string(), line.clone());
                        continue;
                    }
                    Some(addr) => Inst::A(addr),
                    // unreachable under the two-pass contract
                    None => {
                        let err = Error::UndefinedSymbol(name.clone());
                        msgs.error(err.to_string(), line.clone());
                        continue;
                    }
                }
            }
            Some(Stmt::C(dest, comp, jump)) => Inst::C(*dest, *comp, *jump),
            Some(Stmt::Label(_)) | Some(Stmt::Err) | None => continue,
        };
        let bin = inst.to_bin();
        line.set_bin(bin);
        words.push(bin);
    }
    (words, msgs)
}

// ----------------------------------------------------------------------------
// Driver

/// Translates one source unit into its machine words. On any error the
/// collected diagnostics come back instead; a partial binary is never
/// produced.
pub fn assemble(path: &str, src: &str) -> Result<Vec<u16>, Msgs> {
    let (lines, mut msgs) = parse(path, src);
    let mut table = SymbolTable::new();
    msgs.extend(collect_labels(&lines, &mut table));
    if msgs.has_error() {
        return Err(msgs);
    }
    let (words, msgs) = generate(&lines, &mut table);
    if msgs.has_error() {
        return Err(msgs);
    }
    Ok(words)
}

// ----------------------------------------------------------------------------
// Output

/// Renders machine words as the `.hack` text format: one 16-character
/// zero-padded binary line per word.
pub fn format_words(words: &[u16]) -> String {
    words.iter().map(|word| format!("{word:016b}\n")).collect()
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pass1(src: &str) -> SymbolTable {
        let (lines, msgs) = parse("t.asm", src);
        assert!(!msgs.has_error());
        let mut table = SymbolTable::new();
        let msgs = collect_labels(&lines, &mut table);
        assert!(!msgs.has_error());
        table
    }

    #[test]
    fn test_label_binds_next_instruction() {
        let table = pass1("(START)\n@1\nD=A\n(MID)\n0;JMP\n(END)");
        assert_eq!(table.resolve("START"), Some(0));
        assert_eq!(table.resolve("MID"), Some(2));
        assert_eq!(table.resolve("END"), Some(3));
    }

    #[test]
    fn test_labels_skip_blanks_and_comments() {
        let table = pass1("// header\n\n@1\n\n(HERE) // note\n\nD=A");
        assert_eq!(table.resolve("HERE"), Some(1));
    }

    #[test]
    fn test_two_labels_same_address() {
        let table = pass1("(FIRST)\n(SECOND)\n@1");
        assert_eq!(table.resolve("FIRST"), Some(0));
        assert_eq!(table.resolve("SECOND"), Some(0));
    }

    #[test]
    fn test_variable_allocation_order() {
        let words = assemble("t.asm", "@i\n@sum\n@i\n@R0").unwrap();
        assert_eq!(words, vec![16, 17, 16, 0]);
    }

    #[test]
    fn test_redefined_label() {
        let msgs = assemble("t.asm", "(X)\n@1\n(X)\n@2").unwrap_err();
        assert!(msgs.has_error());
        assert_eq!(msgs.error_count(), 1);
    }

    #[test]
    fn test_reserved_label() {
        let msgs = assemble("t.asm", "(R0)\n@1").unwrap_err();
        assert!(msgs.has_error());
    }

    #[test]
    fn test_no_partial_output() {
        let msgs = assemble("t.asm", "@2\nD=Q\n@3").unwrap_err();
        assert_eq!(msgs.error_count(), 1);
    }

    #[test]
    fn test_every_parse_error_reported() {
        let msgs = assemble("t.asm", "D=Q\n@ok\nE=D\n@32768").unwrap_err();
        assert_eq!(msgs.error_count(), 3);
    }

    #[test]
    fn test_label_reference_beats_variable() {
        // LOOP is declared after its reference, so it must resolve as a
        // label, not allocate a variable slot
        let words = assemble("t.asm", "@LOOP\n0;JMP\n(LOOP)\n@0\n0;JMP").unwrap();
        assert_eq!(words[0], 2);
    }

    #[test]
    fn test_format_words() {
        assert_eq!(format_words(&[]), "");
        assert_eq!(format_words(&[2, 0xE000]), "0000000000000010\n1110000000000000\n");
    }
}
