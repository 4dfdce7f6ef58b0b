use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use command_doc_validator::config::{Args, Config};
use command_doc_validator::core::{render_json, render_text, ReportFormat};
use command_doc_validator::validation::validate_file;

fn main() -> ExitCode {
    // Argument errors exit 1; --help and --version exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<bool> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = Config::from_args(args)?;
    let evaluation = validate_file(&config.path, config.mode);

    let report = match config.format {
        ReportFormat::Text => render_text(&config.path, &evaluation),
        ReportFormat::Json => render_json(&config.path, &evaluation)?,
    };
    println!("{}", report.trim_end());

    Ok(evaluation.is_valid())
}
