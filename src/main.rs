use std::{fs, process::ExitCode};

use clap::Parser;
use lej::{
    error::LejError,
    interpreter::{
        evaluator::core::{Context, DEFAULT_MAX_DEPTH, DEFAULT_MAX_UNSURE, Options},
        lexer::tokenize,
        parser::parse,
    },
};
use log::LevelFilter;
use miette::{NamedSource, Report};

/// lej evaluates the three-valued logic subset of the Lej language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lej to read `contents` as a path to a `.lej` file instead of a
    /// script.
    #[arg(short, long)]
    file: bool,

    /// Prints every binding, sorted by name, once the program has run.
    #[arg(short, long)]
    print_store: bool,

    /// Prints the terminal sequence produced by the lexer.
    #[arg(long)]
    tokens: bool,

    /// Prints the reduced tree before evaluating it.
    #[arg(long)]
    tree: bool,

    /// Deepest tree nesting evaluated before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Most unsure atoms a program may instantiate.
    #[arg(long, default_value_t = DEFAULT_MAX_UNSURE)]
    max_unsure: usize,

    /// Raises log verbosity; repeat for more (`-v` info, `-vv` debug, `-vvv`
    /// trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let (name, script) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => (args.contents.clone(), script),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<script>".to_string(), args.contents.clone())
    };

    match execute(&args, &script) {
        Ok(context) => {
            if args.print_store {
                for (name, value) in context.store.bindings() {
                    println!("{name} = {value}");
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{:?}", Report::new(e).with_source_code(NamedSource::new(name, script)));
            eprintln!("This Lej program has terminated.");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args, script: &str) -> Result<Context, LejError> {
    let terminals = tokenize(script)?;
    if args.tokens {
        for terminal in &terminals {
            println!("{} {:?} @{}",
                     terminal.symbol,
                     terminal.literal().unwrap_or_default(),
                     terminal.span);
        }
    }

    let tree = parse(terminals)?;
    if args.tree {
        print!("{tree}");
    }

    let mut context = Context::with_options(Options { max_depth:  args.max_depth,
                                                      max_unsure: args.max_unsure, });
    context.walk(&tree.ast, tree.root)?;
    Ok(context)
}
