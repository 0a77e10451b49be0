//! Represents the coffee machine itself: the stock containers, the money
//! box and the menu state, driven one line of input at a time.

use std::collections::HashMap;

use drinks::drink::Drink;
use drinks::ingredient::Ingredient;

use crate::container::Container;
use crate::input::InputSource;
use crate::logger::Logger;
use crate::machine_event::MachineEvent;
use crate::machine_state::MachineState;

pub struct Machine {
    stock: HashMap<Ingredient, Container>,
    money: u32,
    state: MachineState,
    logger: Option<Logger>,
}

impl Machine {
    /// Creates a machine with the stock and money it ships with, turned off
    pub fn new(logger: Option<Logger>) -> Machine {
        Machine::with_stock(400, 540, 120, 9, 550, logger)
    }

    /// Creates a machine with the given stock and money, turned off
    /// # Arguments
    /// * `water` - A u32 representing the stocked ml of water
    /// * `milk` - A u32 representing the stocked ml of milk
    /// * `beans` - A u32 representing the stocked grams of coffee beans
    /// * `cups` - A u32 representing the stocked disposable cups
    /// * `money` - A u32 representing the dollars in the money box
    /// * `logger` - The sales log to append events to, if any
    /// # Returns
    /// * A Machine
    pub fn with_stock(
        water: u32,
        milk: u32,
        beans: u32,
        cups: u32,
        money: u32,
        logger: Option<Logger>,
    ) -> Machine {
        let mut stock = HashMap::new();
        stock.insert(Ingredient::Water, Container::new(water));
        stock.insert(Ingredient::Milk, Container::new(milk));
        stock.insert(Ingredient::Beans, Container::new(beans));
        stock.insert(Ingredient::Cups, Container::new(cups));
        Machine {
            stock,
            money,
            state: MachineState::Off,
            logger,
        }
    }

    /// Turns the machine on, leaving it waiting at the main menu
    pub fn start(&mut self) {
        self.state = MachineState::Menu;
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_off(&self) -> bool {
        self.state == MachineState::Off
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    /// To obtain the stocked quantity of the given ingredient
    pub fn stock_of(&self, ingredient: Ingredient) -> u32 {
        self.stock
            .get(&ingredient)
            .map(Container::quantity)
            .unwrap_or(0)
    }

    /// Prints the prompt of the current state, if it has one
    pub fn show_prompt(&self) {
        if let Some(prompt) = self.state.prompt() {
            println!("{}", prompt);
        }
    }

    /// Hands one line of input to whichever handler the current state uses
    pub fn handle_input(&mut self, input: &str) {
        match self.state {
            MachineState::Menu => self.control_main_menu(input),
            MachineState::BuyMenu => self.buy(input),
            MachineState::FillWater => self.fill(Ingredient::Water, input),
            MachineState::FillMilk => self.fill(Ingredient::Milk, input),
            MachineState::FillBeans => self.fill(Ingredient::Beans, input),
            MachineState::FillCups => self.fill(Ingredient::Cups, input),
            MachineState::Off => (),
        }
    }

    fn control_main_menu(&mut self, input: &str) {
        match input {
            "buy" => self.state = MachineState::BuyMenu,
            "fill" => self.state = MachineState::FillWater,
            "take" => self.take_money(),
            "remaining" => self.print_stats(),
            "exit" => self.state = MachineState::Off,
            _ => println!("Invalid Command"),
        }
    }

    fn print_stats(&self) {
        println!(
            "\nThe coffee machine has:\n{} ml of water\n{} ml of milk\n{} g of coffee beans\n{} disposable cups\n${} of money\n",
            self.stock_of(Ingredient::Water),
            self.stock_of(Ingredient::Milk),
            self.stock_of(Ingredient::Beans),
            self.stock_of(Ingredient::Cups),
            self.money
        );
    }

    fn take_money(&mut self) {
        println!("\nI gave you ${}\n", self.money);
        let amount = self.money;
        self.money = 0;
        self.log_event(MachineEvent::MoneyTaken { amount });
    }

    fn buy(&mut self, input: &str) {
        if input == "back" {
            println!();
            self.state = MachineState::Menu;
            return;
        }
        match input.parse::<u32>() {
            Ok(selection) => match Drink::from_selection(selection) {
                Some(drink) => self.prepare_drink(drink),
                None => println!("Invalid command"),
            },
            Err(_) => println!("Please enter a valid command"),
        }
    }

    /// Checks the recipe against the stock, then either reports every
    /// missing ingredient or consumes the recipe and charges the price.
    /// Both outcomes land back at the main menu.
    fn prepare_drink(&mut self, drink: Drink) {
        let recipe = drink.recipe();
        let insufficient: Vec<Ingredient> = Ingredient::values()
            .into_iter()
            .filter(|ingredient| recipe.amount_of(*ingredient) > self.stock_of(*ingredient))
            .collect();

        if !insufficient.is_empty() {
            for ingredient in insufficient {
                println!("{}", ingredient.shortage_message());
            }
            println!();
            self.state = MachineState::Menu;
            return;
        }

        println!("I have enough resources, making you a coffee!\n");
        for ingredient in Ingredient::values() {
            if let Some(container) = self.stock.get_mut(&ingredient) {
                container.consume(recipe.amount_of(ingredient));
            }
        }
        self.money += drink.price();
        self.log_event(MachineEvent::DrinkSold {
            drink,
            price: drink.price(),
        });
        self.state = MachineState::Menu;
    }

    // Fill states advance through the chain no matter what the client
    // typed; only the stock update is skipped on a bad amount.
    fn fill(&mut self, ingredient: Ingredient, input: &str) {
        self.add_ingredient(ingredient, input);
        self.state = match ingredient {
            Ingredient::Water => MachineState::FillMilk,
            Ingredient::Milk => MachineState::FillBeans,
            Ingredient::Beans => MachineState::FillCups,
            Ingredient::Cups => {
                println!();
                MachineState::Menu
            }
        };
    }

    fn add_ingredient(&mut self, ingredient: Ingredient, amount: &str) {
        match amount.parse::<u32>() {
            Ok(amount) => {
                self.stock
                    .entry(ingredient)
                    .or_insert_with(|| Container::new(0))
                    .add(amount);
                self.log_event(MachineEvent::Refilled { ingredient, amount });
            }
            Err(_) => println!("Invalid number"),
        }
    }

    fn log_event(&mut self, event: MachineEvent) {
        if let Some(logger) = &mut self.logger {
            logger
                .log(&event)
                .unwrap_or_else(|e| eprintln!("Error writing sales log: {}", e));
        }
    }
}

/// Drives the machine until it is turned off, showing the prompt of the
/// current state and feeding it one line of input at a time.
pub fn run(machine: &mut Machine, input: &mut dyn InputSource) -> Result<(), String> {
    while !machine.is_off() {
        machine.show_prompt();
        let line = input.read_line()?;
        machine.handle_input(&line);
    }
    Ok(())
}
