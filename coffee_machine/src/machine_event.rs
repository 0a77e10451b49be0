//! This module contains the definition of the MachineEvent enum.
//! One event is recorded in the sales log for everything the machine does
//! that moves stock or money: a drink sold, an ingredient refilled, the
//! collected money handed over.

use serde::{Deserialize, Serialize};

use drinks::drink::Drink;
use drinks::ingredient::Ingredient;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MachineEvent {
    DrinkSold { drink: Drink, price: u32 },
    Refilled { ingredient: Ingredient, amount: u32 },
    MoneyTaken { amount: u32 },
}
