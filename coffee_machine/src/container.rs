//! A container holding the machine's stock of one ingredient

#[derive(Debug, Clone)]
pub struct Container {
    quantity: u32,
}

impl Container {
    pub fn new(quantity: u32) -> Self {
        Container { quantity }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Refills the container with the given amount
    pub fn add(&mut self, amount: u32) {
        self.quantity += amount;
    }

    /// Takes the given amount out of the container. Callers check the
    /// quantity first; the machine never consumes more than it holds.
    pub fn consume(&mut self, amount: u32) {
        self.quantity -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_consume_update_the_quantity() {
        let mut container = Container::new(400);
        container.add(100);
        assert_eq!(container.quantity(), 500);
        container.consume(250);
        assert_eq!(container.quantity(), 250);
    }
}
