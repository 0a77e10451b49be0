//! Where the machine's input lines come from.
//! The interactive binary reads standard input; tests script whole sessions
//! through a mock.

use std::io::{self, BufRead};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait InputSource {
    /// Reads the next line of input, with the line terminator stripped.
    fn read_line(&mut self) -> Result<String, String>;
}

/// Blocking line reader over standard input
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> Result<String, String> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("unexpected end of input".to_string());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
