use clap::Parser;
use mdscope_cli::args::{Args, Command, CommitArgs, CountArgs};
use mdscope_cli::config::{CommitSetup, CountSetup};
use mdscope_cli::error::Result;
use mdscope_cli::{logging, presentation};
use mdscope_engine::{Session, census, watch};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let result = match args.command {
        Command::Commit(commit) => run_commit(commit),
        Command::Count(count) => run_count(count),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_commit(args: CommitArgs) -> Result<()> {
    let setup = CommitSetup::try_from(args)?;
    let stdin = io::stdin();
    let outcome = Session::new(
        &setup.session,
        &setup.topics,
        &setup.verbs,
        stdin.lock(),
        io::stdout(),
    )
    .run()?;
    tracing::info!("{}", presentation::describe_outcome(&outcome));
    Ok(())
}

fn run_count(args: CountArgs) -> Result<()> {
    let setup = CountSetup::try_from(args)?;

    if !setup.watch {
        return count_once(&setup);
    }

    let run_cycle = || {
        if setup.output.is_none() {
            presentation::print_clear_screen();
        }
        if let Err(e) = count_once(&setup) {
            eprintln!("Error in watch cycle: {e}");
        }
    };
    watch::watch_loop(&setup.census, setup.output.as_slice(), run_cycle)?;
    Ok(())
}

fn count_once(setup: &CountSetup) -> Result<()> {
    let report = census(&setup.census)?;
    let rendered = presentation::render(&report, setup.format)?;
    match &setup.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
