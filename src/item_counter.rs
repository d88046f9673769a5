use item::Item;

// Dense counter over interned item ids; item ids start at 1 so slot 0
// is never used.
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCounter;
    use item::Item;

    #[test]
    fn test_item_counter() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(1), 2);
        counter.add(&Item::with_id(3), 1);
        counter.add(&Item::with_id(3), 1);
        assert_eq!(counter.get(&Item::with_id(1)), 2);
        assert_eq!(counter.get(&Item::with_id(2)), 0);
        assert_eq!(counter.get(&Item::with_id(3)), 2);
        assert_eq!(counter.get(&Item::with_id(100)), 0);
    }
}
