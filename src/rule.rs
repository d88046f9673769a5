use item::Item;

// One bidirectional rule record per frequent pair {A,B}; carries the
// confidence of both directions since lift is the ranking measure and
// is symmetric.
#[derive(Clone, Debug)]
pub struct Rule {
    pub item_a: Item,
    pub item_b: Item,
    pub count_a: u32,
    pub count_b: u32,
    pub count_ab: u32,
    pub support_a: f64,
    pub support_b: f64,
    pub support_ab: f64,
    pub confidence_a_b: f64,
    pub confidence_b_a: f64,
    pub lift: f64,
}

impl Rule {
    // Callers must only pair items that passed minimum-support
    // pruning, which keeps both supports nonzero.
    pub fn make(
        item_a: Item,
        item_b: Item,
        count_a: u32,
        count_b: u32,
        count_ab: u32,
        num_transactions: usize,
    ) -> Rule {
        assert!(count_a > 0 && count_b > 0);
        assert!(num_transactions > 0);
        let n = num_transactions as f64;
        let support_a = (count_a as f64) / n;
        let support_b = (count_b as f64) / n;
        let support_ab = (count_ab as f64) / n;
        Rule {
            item_a,
            item_b,
            count_a,
            count_b,
            count_ab,
            support_a,
            support_b,
            support_ab,
            confidence_a_b: support_ab / support_a,
            confidence_b_a: support_ab / support_b,
            lift: support_ab / (support_a * support_b),
        }
    }
}
