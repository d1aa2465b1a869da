//! Output helpers: every service command prints pretty JSON to stdout.

use std::io::{self, Write};

use crate::error::CliError;

/// Serialize `data` as indented JSON and print it.
pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(data)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Print the fixed success envelope used by mutating services.
pub fn print_success(message: &str) -> Result<(), CliError> {
    print_json(&serde_json::json!({
        "status": "success",
        "message": message,
    }))
}
