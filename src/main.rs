use std::process::ExitCode;

use clap::Parser;
use junction_finder::cmd;
use junction_finder::runtime;

/// Screen assemblies for junction sequences in order to characterize specific plasmid markers
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    command: cmd::JunctionFinderCMD,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    runtime::setup_global_logger(cli.command.debug);

    match cli.command.try_execute() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            //Broken layout is a plain diagnostic, everything else is reported as an error
            match e.downcast_ref::<runtime::Error>() {
                Some(err) if err.is_structural() => println!("{}", err),
                _ => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}
