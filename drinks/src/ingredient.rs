//! Ingredients stocked by the coffee machine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Water,
    Milk,
    Beans,
    Cups,
}

impl Ingredient {
    /// Returns all the possible values of Ingredient, in the order the
    /// machine checks them when preparing a drink
    pub fn values() -> Vec<Ingredient> {
        vec![
            Ingredient::Water,
            Ingredient::Milk,
            Ingredient::Beans,
            Ingredient::Cups,
        ]
    }

    /// Message shown to the client when there is not enough of this ingredient
    pub fn shortage_message(&self) -> &'static str {
        match self {
            Ingredient::Water => "Sorry, not enough water!",
            Ingredient::Milk => "Sorry, not enough milk!",
            Ingredient::Beans => "Sorry, not enough coffee beans!",
            Ingredient::Cups => "Sorry, not enough disposable cups!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_starts_with_water_and_ends_with_cups() {
        let values = Ingredient::values();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], Ingredient::Water);
        assert_eq!(values[3], Ingredient::Cups);
    }

    #[test]
    fn test_shortage_message_names_the_ingredient() {
        assert_eq!(
            Ingredient::Beans.shortage_message(),
            "Sorry, not enough coffee beans!"
        );
        assert_eq!(
            Ingredient::Cups.shortage_message(),
            "Sorry, not enough disposable cups!"
        );
    }
}
