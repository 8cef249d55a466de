use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use reversible_list::repl::{Repl, ReplError, DEFAULT_PROMPT};

/// Interactive playground for a deque that reverses in constant time.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct CliArgs {
    /// Printed before reading each command.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Read commands from this file instead of stdin. Disables the prompt.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Repeat every command after the prompt.
    #[arg(short, long)]
    pub echo: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), ReplError> {
    let (input, prompt): (Box<dyn BufRead>, _) = match &args.script {
        Some(path) => (Box::new(BufReader::new(File::open(path)?)), None),
        None => (Box::new(io::stdin().lock()), Some(args.prompt)),
    };

    Repl::new(input, io::stdout().lock())
        .with_prompt(prompt)
        .with_echo(args.echo)
        .run()
}
