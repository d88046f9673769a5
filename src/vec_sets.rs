// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Assumes both vectors are sorted.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    // Count the length required in the union, to avoid
    // paying for reallocations while pushing onto the end.
    let mut count = 0;
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            count += 1;
            ap += 1;
        } else if b[bp] < a[ap] {
            count += 1;
            bp += 1;
        } else {
            count += 1;
            ap += 1;
            bp += 1;
        }
    }
    count += a.len() - ap;
    count += b.len() - bp;

    let mut c: Vec<T> = Vec::with_capacity(count);
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    while ap < a.len() {
        c.push(a[ap]);
        ap += 1;
    }
    while bp < b.len() {
        c.push(b[bp]);
        bp += 1;
    }
    c
}

// Assumes both vectors are sorted. The intersection can't be larger
// than the smaller input, so reserve that up front.
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(if a.len() < b.len() { a.len() } else { b.len() });
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use item::Item;
    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|i| Item::with_id(*i)).collect()
    }

    #[test]
    fn test_union() {
        use super::union;

        let test_cases: Vec<(Vec<Item>, Vec<Item>, Vec<Item>)> = [
            (vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 3], vec![3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 3, 5], vec![2, 4], vec![1, 2, 3, 4, 5]),
            (vec![], vec![1], vec![1]),
            (vec![1], vec![], vec![1]),
            (vec![], vec![], vec![]),
        ]
        .iter()
        .map(|&(ref a, ref b, ref u)| (to_item_vec(a), to_item_vec(b), to_item_vec(u)))
        .collect();

        for &(ref a, ref b, ref c) in &test_cases {
            assert_eq!(&union(&a, &b), c);
        }
    }

    #[test]
    fn test_intersection() {
        use super::intersection;

        let test_cases: Vec<(Vec<usize>, Vec<usize>, Vec<usize>)> = vec![
            (vec![1, 2, 3], vec![4, 5, 6], vec![]),
            (vec![1, 2, 3], vec![3, 4, 5], vec![3]),
            (vec![1, 2, 3, 4], vec![2, 4, 6], vec![2, 4]),
            (vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]),
            (vec![], vec![1, 2], vec![]),
            (vec![1, 2], vec![], vec![]),
        ];

        for &(ref a, ref b, ref c) in &test_cases {
            assert_eq!(&intersection(&a, &b), c);
            assert_eq!(&intersection(&b, &a), c);
        }
    }
}
