use color_print::cprintln;
use std::io::Write;

use hackasm::{collect_labels, format_words, generate, parse, Error, SymbolTable};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.hack")]
    output: String,

    /// Dump assembled code
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Read File and Parse Lines");
    println!("  < {}", args.input);
    let src = std::fs::read_to_string(&args.input)
        .map_err(|err| Error::FileOpen(args.input.clone(), err))?;
    let (lines, mut msgs) = parse(&args.input, &src);

    println!("2. Resolve Symbols and Generate Binary");
    let mut table = SymbolTable::new();
    msgs.extend(collect_labels(&lines, &mut table));
    if !msgs.has_error() {
        let (words, gen_msgs) = generate(&lines, &mut table);
        msgs.extend(gen_msgs);
        if !msgs.has_error() {
            println!("  > {}", args.output);
            let mut file = std::fs::File::create(&args.output)
                .map_err(|err| Error::FileCreate(args.output.clone(), err))?;
            file.write_all(format_words(&words).as_bytes())
                .map_err(|err| Error::FileWrite(args.output.clone(), err))?;
        }
    }

    if args.dump {
        for line in &lines {
            println!("{}", line.cformat());
        }
        println!("+------+------+------------------+----------------------------+");
    }

    msgs.print();
    if msgs.has_error() {
        cprintln!(
            "<red,bold>error</>: could not assemble `{}` ({} errors)",
            args.input,
            msgs.error_count()
        );
        std::process::exit(1);
    }
    Ok(())
}
