use crate::errors::{Error, Result};
use std::io::{BufRead, Write};

/// Ask for an anagram query until a non-blank answer is given.
///
/// Returns `Ok(None)` when input ends before a usable answer arrives.
pub fn prompt_query<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed before a query was entered");
            return Ok(None);
        }

        match parse_query(&line) {
            Ok(query) => return Ok(Some(query)),
            Err(e) if e.is_recoverable() => log::debug!("{}; prompting again", e),
            Err(e) => return Err(e),
        }
    }
}

/// Strip surrounding whitespace from a raw answer.
pub fn parse_query(line: &str) -> Result<String> {
    let query = line.trim();
    if query.is_empty() {
        return Err(Error::invalid_input("empty query"));
    }
    Ok(query.to_string())
}
