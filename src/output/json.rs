use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    write(&mut io::stdout().lock(), value)
}

pub fn write<T: Serialize>(out: &mut impl Write, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pretty_json_with_trailing_newline() {
        let mut out = Vec::new();
        write(&mut out, &serde_json::json!({"status": "missing"})).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "{\n  \"status\": \"missing\"\n}\n"
        );
    }
}
