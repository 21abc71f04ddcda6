use std::process::ExitCode;

use log::error;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", cli::diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}
