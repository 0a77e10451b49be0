//! Represents the amounts of each ingredient needed to prepare one drink

use serde::{Deserialize, Serialize};

use crate::ingredient::Ingredient;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    water: u32,
    milk: u32,
    beans: u32,
    cups: u32,
}

impl Recipe {
    /// Creates a new recipe
    /// # Arguments
    /// * `water` - A u32 representing the ml of water needed
    /// * `milk` - A u32 representing the ml of milk needed
    /// * `beans` - A u32 representing the grams of coffee beans needed
    /// * `cups` - A u32 representing the disposable cups needed
    /// # Returns
    /// * A Recipe
    pub fn new(water: u32, milk: u32, beans: u32, cups: u32) -> Recipe {
        Recipe {
            water,
            milk,
            beans,
            cups,
        }
    }

    /// To obtain the amount needed of the given ingredient
    pub fn amount_of(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Water => self.water,
            Ingredient::Milk => self.milk,
            Ingredient::Beans => self.beans,
            Ingredient::Cups => self.cups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_created_correctly() {
        let recipe = Recipe::new(250, 0, 16, 1);
        assert_eq!(recipe.amount_of(Ingredient::Water), 250);
        assert_eq!(recipe.amount_of(Ingredient::Milk), 0);
        assert_eq!(recipe.amount_of(Ingredient::Beans), 16);
        assert_eq!(recipe.amount_of(Ingredient::Cups), 1);
    }
}
