use interfaced::cli;
use std::process::ExitCode;

// Exit codes: 0 = yes, 1 = no, 2 = the question could not be answered
fn main() -> ExitCode {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    match cli::run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
