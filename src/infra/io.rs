//! Reading Editor.js documents and writing rendered output.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use serde_json::Value;

use super::error::InfraError;

/// Path accepted in place of a file to mean standard input / output.
pub const STDIO_PATH: &str = "-";

/// Read and decode a JSON document from a file, or stdin when `path` is `-`.
pub fn read_document(path: &Path) -> Result<Value, InfraError> {
    let text = if path == Path::new(STDIO_PATH) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    decode_document(&path.display().to_string(), &text)
}

pub fn decode_document(input: &str, text: &str) -> Result<Value, InfraError> {
    serde_json::from_str(text).map_err(|err| InfraError::decode(input, err))
}

/// Write rendered HTML to `path`, or stdout when no path (or `-`) is given.
pub fn write_output(path: Option<&Path>, html: &str) -> Result<(), InfraError> {
    match path {
        Some(path) if path != Path::new(STDIO_PATH) => fs::write(path, html)?,
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
