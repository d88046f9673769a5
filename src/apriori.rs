use fnv::{FnvHashMap, FnvHashSet};
use index::Index;
use itemset::ItemSet;
use rayon::prelude::*;

// Working map of one mining level, and the shape of the overall
// result: each itemset keyed to its occurrence (tid) set.
pub type ItemSetOccurrences = FnvHashMap<ItemSet, Vec<usize>>;

// Drops every entry whose occurrence set is below the absolute
// minimum support count. Surviving entries are untouched.
pub fn prune(itemsets: &mut ItemSetOccurrences, min_count: usize) {
    itemsets.retain(|_, tids| tids.len() >= min_count);
}

// Joins each unordered pair of distinct frequent (k-1)-itemsets and
// keeps the unions with exactly k members. Unions of pairs sharing
// fewer than k-2 members come out too large and are dropped, so the
// standard join condition needs no explicit check. The hash set
// deduplicates candidates reachable from several source pairs.
pub fn candidate_itemsets(frequent: &[ItemSet], k: usize) -> Vec<ItemSet> {
    let mut candidates: FnvHashSet<ItemSet> = FnvHashSet::default();
    for (i, a) in frequent.iter().enumerate() {
        for b in &frequent[i + 1..] {
            let candidate = a.union(b);
            if candidate.len() == k {
                candidates.insert(candidate);
            }
        }
    }
    candidates.into_iter().collect()
}

// Computes the occurrence set of every candidate by tid-list
// intersection. Candidates occurring nowhere are dropped rather than
// recorded with an empty set. Candidates within a level are
// independent, so they are farmed out across threads.
fn intersect_candidates(candidates: Vec<ItemSet>, index: &Index) -> ItemSetOccurrences {
    candidates
        .into_par_iter()
        .filter_map(|candidate| {
            let tids = index.occurrence(&candidate);
            if tids.is_empty() {
                None
            } else {
                Some((candidate, tids))
            }
        })
        .collect()
}

// Level-wise search. Starts from the pruned singletons, then repeats
// generate -> intersect -> prune until a level produces no candidates
// or no survivors. Returns every frequent itemset seen at any level,
// keyed to its occurrence set.
pub fn apriori(index: &Index, min_count: usize) -> ItemSetOccurrences {
    let mut level: ItemSetOccurrences = FnvHashMap::default();
    for item in index.all_items() {
        let tids = index.tids_of(item);
        if !tids.is_empty() {
            level.insert(ItemSet::single(item), tids.to_vec());
        }
    }
    prune(&mut level, min_count);

    let mut frequent = level.clone();
    let mut k = 2;
    loop {
        let previous: Vec<ItemSet> = level.keys().cloned().collect();
        let candidates = candidate_itemsets(&previous, k);
        if candidates.is_empty() {
            break;
        }
        let mut next = intersect_candidates(candidates, index);
        prune(&mut next, min_count);
        if next.is_empty() {
            break;
        }
        for (itemset, tids) in &next {
            frequent.insert(itemset.clone(), tids.clone());
        }
        level = next;
        k += 1;
    }
    frequent
}
