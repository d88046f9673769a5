#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id: id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}
