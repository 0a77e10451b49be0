use std::process::exit;

use coffee_machine::input::StdinInput;
use coffee_machine::logger::{Logger, SALES_LOG_PATH};
use coffee_machine::machine::{run, Machine};

fn main() {
    // the machine keeps vending without a sales log if it cannot be opened
    let logger = match Logger::new(SALES_LOG_PATH) {
        Ok(logger) => Some(logger),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };

    let mut machine = Machine::new(logger);
    machine.start();

    run(&mut machine, &mut StdinInput).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1)
    });
}
