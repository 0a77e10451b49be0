//! Append-only sales log of the coffee machine

use std::fs::{File, OpenOptions};
use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::machine_event::MachineEvent;

pub const SALES_LOG_PATH: &str = "sales_log.jsonl";

#[derive(Debug, Serialize, Deserialize)]
struct LogEntry {
    timestamp: String,
    event: MachineEvent,
}

pub struct Logger {
    file: File,
}

impl Logger {
    /// Opens the sales log at the given path, creating it if needed.
    /// Entries are appended, never rewritten.
    pub fn new(path: &str) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Error opening sales log: {}", e))?;
        Ok(Logger { file })
    }

    /// Appends one event to the log as a single JSON line stamped with the
    /// current UTC time.
    pub fn log(&mut self, event: &MachineEvent) -> Result<(), String> {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            event: *event,
        };
        let line = serde_json::to_string(&entry).map_err(|e| e.to_string())?;
        self.file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.write_all(b"\n"))
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drinks::drink::Drink;
    use drinks::ingredient::Ingredient;
    use std::fs;

    #[test]
    fn test_logged_events_come_back_one_json_line_each() {
        let path =
            std::env::temp_dir().join(format!("sales_log_test_{}.jsonl", std::process::id()));
        let _ = fs::remove_file(&path);
        let mut logger = Logger::new(path.to_str().unwrap()).unwrap();
        logger
            .log(&MachineEvent::DrinkSold {
                drink: Drink::Espresso,
                price: 4,
            })
            .unwrap();
        logger
            .log(&MachineEvent::Refilled {
                ingredient: Ingredient::Water,
                amount: 100,
            })
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let entries: Vec<LogEntry> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].event,
            MachineEvent::DrinkSold {
                drink: Drink::Espresso,
                price: 4,
            }
        );
        assert_eq!(
            entries[1].event,
            MachineEvent::Refilled {
                ingredient: Ingredient::Water,
                amount: 100,
            }
        );
        let _ = fs::remove_file(&path);
    }
}
