//! Reading documents and writing results for the command-line surface.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use tracing::debug;

use super::error::InfraError;

const STDIN_MARKER: &str = "-";
const STDIN_LABEL: &str = "<stdin>";

/// Read a document from `path`, or from standard input when the path is
/// absent or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String, InfraError> {
    match path {
        Some(path) if path.as_os_str() != STDIN_MARKER => {
            let source = fs::read_to_string(path).map_err(|err| InfraError::read(path, err))?;
            debug!(
                target = "infra::io",
                path = %path.display(),
                bytes = source.len(),
                "document read from file"
            );
            Ok(source)
        }
        _ => read_from(io::stdin().lock()),
    }
}

pub(crate) fn read_from(mut reader: impl Read) -> Result<String, InfraError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|err| InfraError::read(STDIN_LABEL, err))?;
    debug!(target = "infra::io", bytes = source.len(), "document read from stdin");
    Ok(source)
}

/// Write `contents` to `path`, or to standard output when no path is given.
/// A trailing newline is added on stdout only.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<(), InfraError> {
    match path {
        Some(path) => {
            fs::write(path, contents).map_err(|err| InfraError::write(path, err))?;
            debug!(
                target = "infra::io",
                path = %path.display(),
                bytes = contents.len(),
                "output written"
            );
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{contents}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}
