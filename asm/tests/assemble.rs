use hackasm::{assemble, format_words};

fn case(src: &str, expects: &[u16]) {
    let words = match assemble("test.asm", src) {
        Ok(words) => words,
        Err(msgs) => {
            msgs.print();
            panic!("expected a clean assembly");
        }
    };

    for line in src.lines() {
        println!(" {line}");
    }
    for (idx, word) in words.iter().enumerate() {
        println!("{:>4}: {:016b}", idx, word);
    }

    assert_eq!(words.len(), expects.len());
    for (idx, expect) in expects.iter().enumerate() {
        assert_eq!(words[idx], *expect, "word {}", idx);
    }
}

fn err_case(src: &str, expects: usize) {
    let msgs = assemble("test.asm", src).unwrap_err();
    msgs.print();
    assert_eq!(msgs.error_count(), expects);
}

#[test]
fn test_add_program() {
    case(
        "\
// Computes RAM[0] = 2 + 3
@2
D=A
@3
D=D+A
@0
M=D",
        &[
            0b0000000000000010,
            0b1110110000010000,
            0b0000000000000011,
            0b1110000010010000,
            0b0000000000000000,
            0b1110001100001000,
        ],
    );
}

#[test]
fn test_max_program() {
    case(
        "\
// Computes RAM[2] = max(RAM[0], RAM[1])

   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop",
        &[
            0b0000000000000000,
            0b1111110000010000,
            0b0000000000000001,
            0b1111010011010000,
            0b0000000000001010,
            0b1110001100000001,
            0b0000000000000001,
            0b1111110000010000,
            0b0000000000001100,
            0b1110101010000111,
            0b0000000000000000,
            0b1111110000010000,
            0b0000000000000010,
            0b1110001100001000,
            0b0000000000001110,
            0b1110101010000111,
        ],
    );
}

#[test]
fn test_hack_text_lines() {
    let words = assemble("test.asm", "@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
    assert_eq!(
        format_words(&words),
        "0000000000000010\n\
         1110110000010000\n\
         0000000000000011\n\
         1110000010010000\n\
         0000000000000000\n\
         1110001100001000\n"
    );
}

#[test]
fn test_loop_from_start() {
    case(
        "(LOOP)\n@LOOP\n0;JMP",
        &[0b0000000000000000, 0b1110101010000111],
    );
}

#[test]
fn test_forward_reference() {
    case(
        "@END\n0;JMP\nD=A\n(END)\n@END\n0;JMP",
        &[
            0b0000000000000011,
            0b1110101010000111,
            0b1110110000010000,
            0b0000000000000011,
            0b1110101010000111,
        ],
    );
}

#[test]
fn test_variables_allocate_from_16() {
    case("@i\n@sum\n@i\n@R0", &[16, 17, 16, 0]);
}

#[test]
fn test_predefined_symbols() {
    case("@SCREEN\n@KBD\n@SP\n@R6\n@THAT", &[16384, 24576, 0, 6, 4]);
}

#[test]
fn test_label_never_allocates() {
    // counter references a label declared later, so it must not take a
    // variable slot; x gets the first one
    case("@counter\n@x\n(counter)\n@x", &[2, 16, 16]);
}

#[test]
fn test_formatting_noise() {
    case(
        "  // leading comment\n\n\t@2\n   D = A  // spaced fields\n\n( HALT )\n@HALT\n0 ; JMP\n",
        &[
            0b0000000000000010,
            0b1110110000010000,
            0b0000000000000010,
            0b1110101010000111,
        ],
    );
}

#[test]
fn test_deterministic() {
    let src = "@first\n@second\n(X)\n@X";
    let a = assemble("test.asm", src).unwrap();
    let b = assemble("test.asm", src).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_err_redefined_label() {
    err_case("(X)\n@1\n(X)\n@2", 1);
}

#[test]
fn test_err_reserved_label() {
    err_case("(SP)\n@1", 1);
    err_case("(R13)\n@1", 1);
    err_case("(SCREEN)\n@1", 1);
}

#[test]
fn test_err_bad_statements() {
    err_case("D=Q", 1);
    err_case("X=D", 1);
    err_case("D;JXX", 1);
    err_case("@32768", 1);
    err_case("@12ab", 1);
    err_case("(1BAD)", 1);
}

#[test]
fn test_err_all_lines_reported() {
    err_case("D=Q\n@ok\nE=D\n@32768", 3);
}

#[test]
fn test_err_no_partial_output() {
    let msgs = assemble("test.asm", "@2\nD=A\nD=Q").unwrap_err();
    assert!(msgs.has_error());
}

#[test]
fn test_address_range_edges() {
    case("@0\n@32767", &[0b0000000000000000, 0b0111111111111111]);
}

#[test]
fn test_program_fills_rom() {
    let src = "@0\n".repeat(32768) + "(END)";
    let words = assemble("test.asm", &src).unwrap();
    assert_eq!(words.len(), 32768);
    assert!(words.iter().all(|&word| word == 0));
}

#[test]
fn test_program_overflows_rom() {
    err_case(&"@0\n".repeat(32769), 1);
    // one report no matter how far past the limit
    err_case(&"D=A\n".repeat(70000), 1);
}

#[test]
fn test_label_past_rom_end() {
    // END lands one past the last ROM address, so referencing it cannot
    // produce a 15-bit word
    let src = "@END\n".to_string() + &"@0\n".repeat(32767) + "(END)";
    err_case(&src, 1);
}
