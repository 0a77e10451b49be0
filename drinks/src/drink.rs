//! Drinks offered by the coffee machine

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Drink {
    Espresso,
    Latte,
    Cappuccino,
}

impl Drink {
    /// Returns all the possible values of Drink
    pub fn values() -> Vec<Drink> {
        vec![Drink::Espresso, Drink::Latte, Drink::Cappuccino]
    }

    /// To obtain the drink matching a buy-menu selection number, if any
    pub fn from_selection(selection: u32) -> Option<Drink> {
        match selection {
            1 => Some(Drink::Espresso),
            2 => Some(Drink::Latte),
            3 => Some(Drink::Cappuccino),
            _ => None,
        }
    }

    /// Recipe with the ingredient amounts consumed when preparing this drink
    pub fn recipe(&self) -> Recipe {
        match self {
            Drink::Espresso => Recipe::new(250, 0, 16, 1),
            Drink::Latte => Recipe::new(350, 75, 20, 1),
            Drink::Cappuccino => Recipe::new(200, 100, 12, 1),
        }
    }

    /// Price in dollars charged for this drink
    pub fn price(&self) -> u32 {
        match self {
            Drink::Espresso => 4,
            Drink::Latte => 7,
            Drink::Cappuccino => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Ingredient;

    #[test]
    fn test_selection_numbers_match_the_buy_menu() {
        assert_eq!(Drink::from_selection(1), Some(Drink::Espresso));
        assert_eq!(Drink::from_selection(2), Some(Drink::Latte));
        assert_eq!(Drink::from_selection(3), Some(Drink::Cappuccino));
        assert_eq!(Drink::from_selection(4), None);
        assert_eq!(Drink::from_selection(0), None);
    }

    #[test]
    fn test_every_drink_uses_one_cup() {
        for drink in Drink::values() {
            assert_eq!(drink.recipe().amount_of(Ingredient::Cups), 1);
        }
    }

    #[test]
    fn test_latte_recipe_and_price() {
        let recipe = Drink::Latte.recipe();
        assert_eq!(recipe.amount_of(Ingredient::Water), 350);
        assert_eq!(recipe.amount_of(Ingredient::Milk), 75);
        assert_eq!(recipe.amount_of(Ingredient::Beans), 20);
        assert_eq!(Drink::Latte.price(), 7);
    }
}
