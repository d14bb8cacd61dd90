use std::{
    fs::File,
    io::{self, BufReader, Cursor},
    path::PathBuf,
};

use clap::Parser;
use reckon::session::Session;

/// reckon evaluates arithmetic expressions, one per line, keeping variable
/// bindings for the whole session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from a file instead of standard input. Cannot be combined
    /// with lines given on the command line.
    #[arg(short, long, conflicts_with = "lines")]
    file: Option<PathBuf>,

    /// Lines to evaluate in order before exiting. When given, standard input
    /// is not read.
    lines: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::new();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let result = if !args.lines.is_empty() {
        session.run(Cursor::new(args.lines.join("\n")), &mut out, &mut err)
    } else if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        session.run(BufReader::new(file), &mut out, &mut err)
    } else {
        session.run(io::stdin().lock(), &mut out, &mut err)
    };

    match result {
        Ok(failures) if failures > 0 && !args.lines.is_empty() => std::process::exit(1),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
