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

use fnv::FnvHashMap;
use item::Item;
use itemizer::Itemizer;
use itertools::Itertools;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

// Reads a CSV of transaction_id,item_id rows (header line required)
// and yields one (dense transaction id, item) pair per row. Item
// tokens are interned through the shared itemizer; transaction ids
// get their own dense numbering in order of first appearance.
pub struct TransactionReader<'a> {
    reader: BufReader<File>,
    itemizer: &'a mut Itemizer,
    transaction_ids: FnvHashMap<String, u32>,
    header_read: bool,
}

impl<'a> TransactionReader<'a> {
    pub fn new(path: &str, itemizer: &'a mut Itemizer) -> TransactionReader<'a> {
        let file = File::open(path).unwrap();
        let reader = BufReader::new(file);
        TransactionReader {
            reader: reader,
            itemizer,
            transaction_ids: FnvHashMap::default(),
            header_read: false,
        }
    }

    fn tid_of(&mut self, token: &str) -> u32 {
        let next_id = self.transaction_ids.len() as u32;
        *self.transaction_ids
            .entry(String::from(token))
            .or_insert(next_id)
    }
}

impl<'a> Iterator for TransactionReader<'a> {
    type Item = (u32, Item);
    fn next(&mut self) -> Option<(u32, Item)> {
        loop {
            let mut line = String::new();
            let len = self.reader.read_line(&mut line).unwrap();
            if len == 0 {
                return None;
            }
            if !self.header_read {
                self.header_read = true;
                continue;
            }
            let mut splits = line.trim().splitn(2, ',');
            let tid_token = match splits.next() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            let item_token = match splits.next() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            let tid = self.tid_of(tid_token);
            let item = self.itemizer.id_of(item_token.trim());
            return Some((tid, item));
        }
    }
}

// Sorts the rows by (transaction, item) and collapses consecutive
// rows of one transaction into its deduplicated item vector. The
// sorted order is what lets the pair counting pass walk transactions
// without a lookup structure.
pub fn group_transactions(mut rows: Vec<(u32, Item)>) -> Vec<Vec<Item>> {
    rows.sort();
    let mut transactions: Vec<Vec<Item>> = vec![];
    for (_, group) in &rows.into_iter().group_by(|&(tid, _)| tid) {
        let mut items: Vec<Item> = group.map(|(_, item)| item).collect();
        items.dedup();
        transactions.push(items);
    }
    transactions
}

// Loads an item_id,item_name CSV (header line required) for the
// report. Names keep everything after the first comma, minus any
// surrounding quotes.
pub fn read_item_names(path: &str) -> Result<FnvHashMap<String, String>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut names: FnvHashMap<String, String> = FnvHashMap::default();
    for line in reader.lines().skip(1) {
        let line = line?;
        let mut splits = line.trim().splitn(2, ',');
        let id = match splits.next() {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };
        let name = match splits.next() {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };
        names.insert(
            String::from(id),
            String::from(name.trim().trim_matches('"')),
        );
    }
    Ok(names)
}
