//! Command-line entry point: `fieldcut [-h] [-d DELIM] [RANGE]...`.

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use fieldcut::{help_text, usage_hint, Command, Config, Error, Selector};

const DEFAULT_PROG: &str = "fieldcut";

fn main() -> ExitCode {
    let mut args = std::env::args_os();
    let prog = args
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .map_or_else(
            || DEFAULT_PROG.to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

    let command = match Config::from_args(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{prog}: {e}");
            eprintln!("{}", usage_hint(&prog));
            return ExitCode::FAILURE;
        }
    };

    match run(&prog, command) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed early (e.g. `| head`); not our failure
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{prog}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(prog: &str, command: Command) -> Result<(), Error> {
    let mut stdout = BufWriter::new(io::stdout().lock());

    match command {
        Command::Help => {
            stdout.write_all(help_text(prog).as_bytes())?;
            stdout.flush()?;
        }
        Command::Run(config) => {
            Selector::new(config).run(io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}
