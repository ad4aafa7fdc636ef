use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use smiles_info::analysis::InvalidSmiles;
use smiles_info::command_line::lookup;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = match lookup::command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                e.print().ok();
                return ExitCode::FAILURE;
            }
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match lookup::action(&matches, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<InvalidSmiles>() {
                Some(invalid) => {
                    writeln!(out, "{}", invalid).ok();
                }
                None => eprintln!("Error: {:?}", e),
            }
            ExitCode::FAILURE
        }
    }
}
