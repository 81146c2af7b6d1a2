use crate::*;

use tarn_errors::ErrorHandler;

use std::io::stdout;

/// Evaluates `root` against standard output.
pub fn run(root: &Node) -> Result<(), RuntimeError> {
    let mut output = stdout().lock();

    run_with_output(root, &mut output)
}

pub fn run_with_output<W: Write>(root: &Node, output: &mut W) -> Result<(), RuntimeError> {
    Evaluator::new(output).run(root)
}

/// Runs `root` and reports a failure on stderr under `file_path`.
/// Returns whether the program completed.
pub fn run_and_report(file_path: &str, root: &Node) -> bool {
    match run(root) {
        Ok(()) => true,

        Err(err) => {
            ErrorHandler::handle_error(file_path, &err);

            false
        }
    }
}
