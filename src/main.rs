use std::error::Error;
use std::process::ExitCode;

use logo_convert::{ConvertConfig, ImageConversionError, LogoConverter};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ConvertConfig::logo(env!("CARGO_MANIFEST_DIR"));
    finish(LogoConverter::new(config).convert())
}

/// Print the outcome and map it to the process exit status.
fn finish(result: Result<(), ImageConversionError>) -> ExitCode {
    match result {
        Ok(()) => {
            println!("Logo converted successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

/// One line with the error and every `source()` below it.
fn report(err: &dyn Error) -> String {
    let mut msg = format!("Error converting logo: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
