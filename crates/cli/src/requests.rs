//! Request sourcing: arguments, a request file, or stdin.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Request processed when no arguments or file are given.
pub const DEMO_REQUEST: &str = "Order 3 laptops";

/// Collects requests from positional arguments followed by `file`.
///
/// A `file` of `-` reads stdin. With neither source the demo request is
/// used. Naming a file that holds no requests is an error.
pub fn collect(args: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut requests: Vec<String> = args
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    if let Some(path) = file {
        let from_file = if path == Path::new("-") {
            read_requests(std::io::stdin().lock(), "stdin")?
        } else {
            let file = File::open(path)
                .with_context(|| format!("reading requests from {}", path.display()))?;
            read_requests(file, &path.display().to_string())?
        };
        if from_file.is_empty() && requests.is_empty() {
            bail!("no requests found in {}", path.display());
        }
        requests.extend(from_file);
    } else if requests.is_empty() {
        requests.push(DEMO_REQUEST.to_string());
    }

    Ok(requests)
}

/// Reads every request from `reader`; `source` names it in errors.
pub fn read_requests(mut reader: impl Read, source: &str) -> Result<Vec<String>> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("reading requests from {source}"))?;
    Ok(parse_lines(&contents))
}

/// One request per non-blank line; lines starting with `#` are comments.
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
