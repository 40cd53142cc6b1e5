use clap::Parser;
use resumecheck::{ErrorEnvelope, InputError, check};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "resumecheck",
    version,
    about = "Structural validator for resume documents in JSON"
)]
struct Cli {
    /// JSON file holding one resume object or an array of them.
    /// Reads standard input when omitted.
    file: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<String, InputError> {
    let input = match &cli.file {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::FileNotFound(path.display().to_string()));
            }
            std::fs::read_to_string(path).map_err(|e| InputError::Unexpected(e.to_string()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| InputError::Unexpected(e.to_string()))?;
            buf
        }
    };
    let output = check(&input)?;
    serde_json::to_string_pretty(&output).map_err(|e| InputError::Unexpected(e.to_string()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let envelope = ErrorEnvelope::from(&err);
            let rendered = serde_json::to_string(&envelope)
                .unwrap_or_else(|_| format!("{{\"error\": \"{err}\"}}"));
            eprintln!("{rendered}");
            ExitCode::FAILURE
        }
    }
}
