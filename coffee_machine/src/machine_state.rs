//! Represents the control state of the coffee machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineState {
    Off,
    Menu,
    BuyMenu,
    FillWater,
    FillMilk,
    FillBeans,
    FillCups,
}

impl MachineState {
    /// Text shown to the client before reading input in this state.
    /// Off is terminal, so it has no prompt.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            MachineState::Off => None,
            MachineState::Menu => Some("Write action (buy, fill, take, remaining, exit): "),
            MachineState::BuyMenu => Some(
                "\nWhat do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: ",
            ),
            MachineState::FillWater => Some("\nWrite how many ml of water you want to add: "),
            MachineState::FillMilk => Some("Write how many ml of milk you want to add: "),
            MachineState::FillBeans => {
                Some("Write how many grams of coffee beans you want to add: ")
            }
            MachineState::FillCups => Some("Write how many disposable cups you want to add: "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_has_no_prompt() {
        assert_eq!(MachineState::Off.prompt(), None);
    }

    #[test]
    fn test_menu_prompt_lists_all_actions() {
        let prompt = MachineState::Menu.prompt().unwrap();
        for action in ["buy", "fill", "take", "remaining", "exit"] {
            assert!(prompt.contains(action));
        }
    }
}
