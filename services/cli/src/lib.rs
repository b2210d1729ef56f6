mod cli;
mod render;

use shift_audit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
