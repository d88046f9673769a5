use item::Item;
use itemset::ItemSet;
use vec_sets::intersection;

// Vertical layout of the transaction database; maps each item to the
// sorted list of dense transaction ids (tids) containing it. Built once
// per run, read-only afterwards.
pub struct Index {
    tid_lists: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new() -> Index {
        Index {
            tid_lists: Vec::new(),
            transaction_count: 0,
        }
    }

    // The transaction must already be deduplicated; an item appearing
    // twice would push the same tid twice and break the sorted-set
    // invariant of the tid lists.
    pub fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for &item in transaction {
            let item_index = item.as_index();
            while self.tid_lists.len() <= item_index {
                self.tid_lists.push(vec![]);
            }
            self.tid_lists[item_index].push(tid);
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.transaction_count
    }

    // Every item with at least one occurrence.
    pub fn all_items(&self) -> Vec<Item> {
        (1..self.tid_lists.len())
            .filter(|&i| !self.tid_lists[i].is_empty())
            .map(|i| Item::with_id(i as u32))
            .collect()
    }

    // Tid list of a single item. Items reaching this point have passed
    // level-1 pruning, so an unknown item is a logic error upstream.
    pub fn tids_of(&self, item: Item) -> &[usize] {
        let item_index = item.as_index();
        if item_index >= self.tid_lists.len() {
            panic!("tid list lookup for item absent from the index");
        }
        &self.tid_lists[item_index]
    }

    // Occurrence set of an itemset: the intersection of its members'
    // tid lists.
    pub fn occurrence(&self, itemset: &ItemSet) -> Vec<usize> {
        let items = itemset.items();
        match items.split_first() {
            None => vec![],
            Some((&first, rest)) => {
                let mut tids = self.tids_of(first).to_vec();
                for &item in rest {
                    if tids.is_empty() {
                        break;
                    }
                    tids = intersection(&tids, self.tids_of(item));
                }
                tids
            }
        }
    }

    pub fn count(&self, itemset: &ItemSet) -> usize {
        self.occurrence(itemset).len()
    }

    pub fn support(&self, itemset: &ItemSet) -> f64 {
        (self.count(itemset) as f64) / (self.transaction_count as f64)
    }
}
