// crates/idfix-cli/src/io/text_file.rs

use std::io::Read;

use anyhow::{Context, Result};

/// Read the whole input. `None` or `"-"` means stdin.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read input from stdin")?;
            tracing::debug!(bytes = s.len(), "read input from stdin");
            Ok(s)
        }
        Some(p) => {
            let s = std::fs::read_to_string(p).with_context(|| format!("read input {p}"))?;
            tracing::debug!(path = p, bytes = s.len(), "read input file");
            Ok(s)
        }
    }
}

/// Write `text` to `path`, adding a trailing newline if missing.
pub fn write_output(path: &str, text: &str) -> Result<()> {
    let mut s = text.to_string();
    if !s.ends_with('\n') {
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write {path}"))?;
    tracing::debug!(path, "wrote output file");
    Ok(())
}
