//! Decode command handler

use anyhow::{Context, Result};
use std::io::{self, Read};

/// Read the code argument, taking it from `stdin` when it is "-"
pub fn read_code(arg: &str, mut stdin: impl Read) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let mut code = String::new();
    stdin
        .read_to_string(&mut code)
        .context("Failed to read import code from stdin")?;
    Ok(code)
}

/// Handle the decode command
pub fn handle(code: &str) -> Result<()> {
    let code = read_code(code, io::stdin().lock())?;
    let xml = pobgen::decode_document(&code).context("Failed to decode import code")?;
    println!("{}", xml);
    Ok(())
}
