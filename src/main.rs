use editimage::error::{EditError, Result};
use editimage::processing::{apply, OperationRequest};
use editimage::report::print_report;
use editimage::validation::validate;
use editimage::{error, info, parse_request};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let request = match parse_request(std::env::args_os()) {
        Ok(request) => request,
        Err(EditError::MalformedArguments(e)) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(&e),
    };

    match run(request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn run(request: OperationRequest) -> Result<()> {
    let verbose = request.verbose;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let validated = validate(request, &mut stdin.lock(), &mut stdout)?;
    let after = apply(&validated)?;

    print_report(&mut stdout, validated.source(), &after, verbose)?;
    Ok(())
}

fn fail(err: &EditError) -> ExitCode {
    match err {
        EditError::OverwriteDeclined => info!(": {}", err),
        EditError::MalformedArguments(e) => {
            let _ = e.print();
        }
        _ => error!("{}", err),
    }
    ExitCode::FAILURE
}
