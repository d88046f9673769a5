use counter::Counter;
use item::Item;
use item_counter::ItemCounter;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rule::Rule;
use std::cmp::Reverse;

// Counts every unordered pair of items co-occurring in a transaction,
// in one pass over the database. Transactions are sorted and
// deduplicated, so each emitted pair is already in canonical
// (low, high) order and no intersection work is needed. For every
// pair of frequent singles this count equals the size of the
// intersection of their tid lists.
pub fn count_pairs(transactions: &[Vec<Item>]) -> Counter<(Item, Item)> {
    let mut counter: Counter<(Item, Item)> = Counter::new();
    for transaction in transactions {
        for (a, b) in transaction.iter().cloned().tuple_combinations() {
            counter.add(&(a, b), 1);
        }
    }
    counter
}

// Scores every pair meeting the minimum support count whose members
// individually meet it too, and ranks the result by lift descending.
// Ties are broken by item id so a rerun over the same input produces
// an identical ordering.
pub fn generate_rules(
    transactions: &[Vec<Item>],
    min_count: u32,
    min_lift: Option<f64>,
) -> Vec<Rule> {
    let num_transactions = transactions.len();
    assert!(num_transactions > 0);

    let mut item_count = ItemCounter::new();
    for transaction in transactions {
        for item in transaction {
            item_count.add(item, 1);
        }
    }

    let pair_counts = count_pairs(transactions);
    let mut rules: Vec<Rule> = vec![];
    for (&(item_a, item_b), &count_ab) in pair_counts.iter() {
        if count_ab < min_count {
            continue;
        }
        let count_a = item_count.get(&item_a);
        let count_b = item_count.get(&item_b);
        if count_a < min_count || count_b < min_count {
            continue;
        }
        let rule = Rule::make(item_a, item_b, count_a, count_b, count_ab, num_transactions);
        if let Some(min_lift) = min_lift {
            if rule.lift < min_lift {
                continue;
            }
        }
        rules.push(rule);
    }

    rules.sort_by_key(|r| (Reverse(OrderedFloat(r.lift)), r.item_a, r.item_b));
    rules
}

#[cfg(test)]
mod tests {
    use super::{count_pairs, generate_rules};
    use index::Index;
    use item::Item;
    use itemset::ItemSet;

    fn to_transactions(transactions: &[Vec<u32>]) -> Vec<Vec<Item>> {
        transactions
            .iter()
            .map(|t| t.iter().map(|&i| Item::with_id(i)).collect())
            .collect()
    }

    #[test]
    fn test_count_pairs() {
        let transactions = to_transactions(&[vec![1, 2, 3], vec![1, 2], vec![2, 3], vec![1, 3]]);
        let counter = count_pairs(&transactions);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.get(&(Item::with_id(1), Item::with_id(2))), 2);
        assert_eq!(counter.get(&(Item::with_id(1), Item::with_id(3))), 2);
        assert_eq!(counter.get(&(Item::with_id(2), Item::with_id(3))), 2);

        assert_eq!(count_pairs(&[]).len(), 0);
        assert_eq!(count_pairs(&to_transactions(&[vec![7]])).len(), 0);
    }

    // The one-pass pair count must agree with the tid-list
    // intersection path for every pair.
    #[test]
    fn test_count_pairs_matches_index() {
        let transactions = to_transactions(&[
            vec![1, 2, 3],
            vec![4, 2, 3],
            vec![1, 2, 5],
            vec![6, 7, 3],
            vec![4, 7, 5],
            vec![6, 2, 3],
            vec![6, 2, 3],
            vec![1, 2, 5],
            vec![1, 2, 3],
            vec![1, 2, 5],
            vec![1, 2, 5],
        ]);
        let mut index = Index::new();
        for t in &transactions {
            index.insert(t);
        }

        let counter = count_pairs(&transactions);
        for a in 1..8 {
            for b in (a + 1)..8 {
                let pair = (Item::with_id(a), Item::with_id(b));
                let itemset = ItemSet::pair(pair.0, pair.1);
                assert_eq!(
                    counter.get(&pair) as usize,
                    index.count(&itemset),
                    "pair count mismatch for {:?}",
                    pair
                );
            }
        }
    }

    #[test]
    fn test_generate_rules() {
        let transactions = to_transactions(&[vec![1, 2, 3], vec![1, 2], vec![2, 3], vec![1, 3]]);
        let rules = generate_rules(&transactions, 2, None);
        assert_eq!(rules.len(), 3);
        for rule in &rules {
            assert_eq!(rule.count_ab, 2);
            assert_eq!(rule.support_ab, 0.5);
            assert_eq!(rule.confidence_a_b, 0.5 / 0.75);
            assert_eq!(rule.lift, 0.5 / (0.75 * 0.75));
        }
        // Equal lift throughout, so ordering falls back to item ids.
        assert_eq!(rules[0].item_a, Item::with_id(1));
        assert_eq!(rules[0].item_b, Item::with_id(2));
        assert_eq!(rules[1].item_b, Item::with_id(3));
        assert_eq!(rules[2].item_a, Item::with_id(2));

        // Everything here has lift below 1.
        assert!(generate_rules(&transactions, 2, Some(1.0)).is_empty());
    }

    #[test]
    fn test_generate_rules_prunes_infrequent() {
        // Item 4 appears once; pairs containing it never qualify, and
        // pair {1,3} occurs once and is dropped by the pair threshold.
        let transactions = to_transactions(&[vec![1, 2, 4], vec![1, 2, 3], vec![2, 3]]);
        let rules = generate_rules(&transactions, 2, None);
        assert_eq!(rules.len(), 2);
        for rule in &rules {
            assert!(rule.count_a >= 2 && rule.count_b >= 2 && rule.count_ab >= 2);
        }
    }

    #[test]
    fn test_sorted_by_lift_and_deterministic() {
        let transactions = to_transactions(&[
            vec![1, 2],
            vec![1, 2],
            vec![1, 2, 3],
            vec![3, 4],
            vec![3, 4],
            vec![1, 4],
            vec![2, 3],
        ]);
        let rules = generate_rules(&transactions, 2, None);
        assert!(!rules.is_empty());
        for window in rules.windows(2) {
            assert!(window[0].lift >= window[1].lift);
        }

        let rerun = generate_rules(&transactions, 2, None);
        assert_eq!(rules.len(), rerun.len());
        for (a, b) in rules.iter().zip(rerun.iter()) {
            assert_eq!(a.item_a, b.item_a);
            assert_eq!(a.item_b, b.item_b);
            assert_eq!(a.lift, b.lift);
        }
    }
}
