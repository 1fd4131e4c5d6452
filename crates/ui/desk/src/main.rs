use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use feedback_desk::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    feedback_desk::run(args).await
}
