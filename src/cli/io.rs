//! stdin/stdout handling for the `calc` command
//!
//! - Input: one request body, the whole of stdin
//! - Output: one JSON object on stdout

use std::io::{Read, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Read the whole input as a request body
pub fn read_body<R: Read>(mut reader: R) -> CliResult<Vec<u8>> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    Ok(body)
}

/// Write a JSON value followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalculationResult;

    #[test]
    fn test_read_body_keeps_bytes() {
        let body = read_body(&b"{\"num1\": 1}\n"[..]).unwrap();
        assert_eq!(body, b"{\"num1\": 1}\n");
    }

    #[test]
    fn test_write_json_one_line() {
        let mut out = Vec::new();
        write_json(&mut out, &CalculationResult { resultado: 2.5 }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"resultado\":2.5}\n");
    }
}
