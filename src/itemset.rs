use item::Item;
use itemizer::Itemizer;
use itertools::Itertools;
use std::cmp;
use vec_sets::union;

// The key type of all mining structures. Equality and hashing go
// through the sorted, deduplicated member vector, so two itemsets
// built in different orders from the same members are the same key.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.items
            .len()
            .cmp(&other.items.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ItemSet {
    pub fn new(items: Vec<Item>) -> ItemSet {
        let mut items: Vec<Item> = items.into_iter().sorted().collect();
        items.dedup();
        ItemSet { items }
    }

    pub fn single(item: Item) -> ItemSet {
        ItemSet { items: vec![item] }
    }

    pub fn pair(a: Item, b: Item) -> ItemSet {
        assert!(a != b);
        ItemSet::new(vec![a, b])
    }

    // Both inputs are canonical, so the merged vector is too.
    pub fn union(&self, other: &ItemSet) -> ItemSet {
        ItemSet {
            items: union(&self.items, &other.items),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = self.items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u32>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by_key(|x| x.parse::<u32>().unwrap_or(0));
    } else {
        a.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::ItemSet;
    use item::Item;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_content_identity() {
        let a = ItemSet::new(to_item_vec(&[3, 1, 2]));
        let b = ItemSet::new(to_item_vec(&[2, 3, 1]));
        assert_eq!(a, b);
        assert_eq!(a.items(), &to_item_vec(&[1, 2, 3])[..]);

        // Duplicates collapse to one membership.
        let c = ItemSet::new(to_item_vec(&[1, 1, 2]));
        assert_eq!(c, ItemSet::new(to_item_vec(&[2, 1])));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_union() {
        let cases = [
            (vec![1, 2], vec![2, 3], vec![1, 2, 3]),
            (vec![1], vec![2], vec![1, 2]),
            (vec![1, 2], vec![1, 2], vec![1, 2]),
        ];
        for &(ref a, ref b, ref u) in cases.iter() {
            let a = ItemSet::new(to_item_vec(a));
            let b = ItemSet::new(to_item_vec(b));
            assert_eq!(a.union(&b), ItemSet::new(to_item_vec(u)));
        }
    }
}
