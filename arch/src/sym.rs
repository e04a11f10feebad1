use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Symbols fixed by the architecture: the virtual registers `R0..R15`,
/// the segment pointers used by the VM convention, and the bases of the
/// two memory-mapped devices.
pub const PREDEF: &[(&str, u16)] = &[
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", 0x4000),
    ("KBD", 0x6000),
];

static PREDEF_MAP: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| PREDEF.iter().copied().collect());

pub fn is_predefined(name: &str) -> bool {
    PREDEF_MAP.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(PREDEF.len(), 23);
        assert_eq!(PREDEF_MAP.len(), 23);
    }

    #[test]
    fn test_values() {
        assert_eq!(PREDEF_MAP["SP"], 0);
        assert_eq!(PREDEF_MAP["LCL"], 1);
        assert_eq!(PREDEF_MAP["ARG"], 2);
        assert_eq!(PREDEF_MAP["THIS"], 3);
        assert_eq!(PREDEF_MAP["THAT"], 4);
        assert_eq!(PREDEF_MAP["R0"], 0);
        assert_eq!(PREDEF_MAP["R6"], 6);
        assert_eq!(PREDEF_MAP["R15"], 15);
        assert_eq!(PREDEF_MAP["SCREEN"], 16384);
        assert_eq!(PREDEF_MAP["KBD"], 24576);
    }

    #[test]
    fn test_is_predefined() {
        assert!(is_predefined("THIS"));
        assert!(is_predefined("R0"));
        assert!(!is_predefined("this"));
        assert!(!is_predefined("R16"));
        assert!(!is_predefined("LOOP"));
    }
}
