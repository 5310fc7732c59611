use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
};

use clap::Parser;
use rpncalc::{
    interpreter::{
        operation::Registry,
        session::{Options, Session},
    },
    repl::{self, ReplConfig},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// rpncalc is an interactive Reverse Polish Notation calculator working on
/// arbitrary-precision decimals. Type `q` to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the whole number stack after every line.
    #[arg(short, long)]
    stack: bool,

    /// Print the kind and position of errors instead of a plain "Parse error".
    #[arg(short, long)]
    verbose: bool,

    /// Read lines from a file instead of the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let registry = Rc::new(Registry::builtin());
    let mut session = Session::with_registry(registry,
                                             Options { report_details: args.verbose });

    let result = if let Some(path) = &args.file {
        let config = ReplConfig { prompt:      None,
                                  print_stack: args.stack, };
        match File::open(path) {
            Ok(file) => repl::run(&mut session, BufReader::new(file), &mut io::stdout(), &config),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else {
        let config = ReplConfig { prompt:      Some(">".to_string()),
                                  print_stack: args.stack, };
        repl::run(&mut session, io::stdin().lock(), &mut io::stdout(), &config)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
