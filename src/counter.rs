use fnv::FnvHashMap;
use std::cmp;
use std::hash::Hash;

pub struct Counter<T> {
    counter: FnvHashMap<T, u32>,
}

impl<T> Counter<T>
where
    T: cmp::Eq,
    T: Hash,
    T: Copy,
{
    pub fn new() -> Counter<T> {
        Counter {
            counter: FnvHashMap::default(),
        }
    }
    pub fn add(&mut self, item: &T, count: u32) {
        *self.counter.entry(*item).or_insert(0) += count;
    }
    pub fn get(&self, item: &T) -> u32 {
        match self.counter.get(&item) {
            Some(count) => *count,
            None => 0,
        }
    }
    pub fn len(&self) -> usize {
        self.counter.len()
    }
    pub fn iter(&self) -> ::std::collections::hash_map::Iter<T, u32> {
        self.counter.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_counter() {
        let mut counter: Counter<(u32, u32)> = Counter::new();
        counter.add(&(1, 2), 1);
        counter.add(&(1, 2), 1);
        counter.add(&(2, 3), 5);
        assert_eq!(counter.get(&(1, 2)), 2);
        assert_eq!(counter.get(&(2, 3)), 5);
        assert_eq!(counter.get(&(9, 9)), 0);
        assert_eq!(counter.len(), 2);
    }
}
