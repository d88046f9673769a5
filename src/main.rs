extern crate argparse;
extern crate fnv;
extern crate itertools;
extern crate ordered_float;
extern crate rayon;

mod apriori;
mod command_line_args;
mod counter;
mod generate_rules;
mod index;
mod item;
mod item_counter;
mod itemizer;
mod itemset;
mod rule;
mod transaction_reader;
mod vec_sets;

use apriori::apriori;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use fnv::FnvHashMap;
use generate_rules::generate_rules;
use index::Index;
use item::Item;
use itemizer::Itemizer;
use itertools::Itertools;
use transaction_reader::group_transactions;
use transaction_reader::read_item_names;
use transaction_reader::TransactionReader;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn display_name<'a>(
    item: Item,
    itemizer: &'a Itemizer,
    names: &'a Option<FnvHashMap<String, String>>,
) -> &'a str {
    let id = itemizer.str_of(item);
    match *names {
        Some(ref names) => names.get(id).map(|name| name.as_str()).unwrap_or(id),
        None => id,
    }
}

fn mine_apriori(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let mut itemizer: Itemizer = Itemizer::new();
    let rows: Vec<(u32, Item)> =
        TransactionReader::new(&args.input_file_path, &mut itemizer).collect();
    let num_rows = rows.len();
    let transactions = group_transactions(rows);
    println!(
        "Read {} rows into {} transactions in {} seconds.",
        num_rows,
        transactions.len(),
        timer.elapsed().as_secs()
    );

    let num_transactions = transactions.len();
    if num_transactions == 0 {
        return Err(From::from("Input contains no transactions"));
    }
    // Truncating product gives the absolute count matching the
    // requested support fraction.
    let min_count = (args.min_support * (num_transactions as f64)) as u32;
    println!("Minimum support count: {}", min_count);

    println!("Building vertical index...");
    let timer = Instant::now();
    let mut index = Index::new();
    for transaction in &transactions {
        index.insert(transaction);
    }
    println!(
        "Building vertical index took {} seconds.",
        timer.elapsed().as_secs()
    );

    println!("Starting level-wise search...");
    let timer = Instant::now();
    let frequent = apriori(&index, min_count as usize);
    println!(
        "Apriori found {} frequent itemsets in {} seconds.",
        frequent.len(),
        timer.elapsed().as_secs()
    );

    if let Some(ref path) = args.output_itemsets_path {
        let mut output = File::create(path)?;
        writeln!(output, "Itemset,Count,Support")?;
        for (itemset, tids) in frequent.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            writeln!(
                output,
                "{},{},{}",
                itemset.to_string(&itemizer),
                tids.len(),
                (tids.len() as f64) / (num_transactions as f64)
            )?;
        }
    }

    println!("Generating rules...");
    let timer = Instant::now();
    let rules = generate_rules(&transactions, min_count, args.min_lift);
    println!(
        "Generated {} rules in {} seconds.",
        rules.len(),
        timer.elapsed().as_secs()
    );

    let item_names = match args.item_names_path {
        Some(ref path) => Some(read_item_names(path)?),
        None => None,
    };

    {
        let mut output = File::create(&args.output_rules_path)?;
        writeln!(
            output,
            "Item A,Item B,Count(AB),Support(AB),Count(A),Support(A),\
             Count(B),Support(B),Conf(A->B),Conf(B->A),Lift"
        )?;
        for rule in &rules {
            writeln!(
                output,
                "{},{},{},{},{},{},{},{},{},{},{}",
                display_name(rule.item_a, &itemizer, &item_names),
                display_name(rule.item_b, &itemizer, &item_names),
                rule.count_ab,
                rule.support_ab,
                rule.count_a,
                rule.support_a,
                rule.count_b,
                rule.support_b,
                rule.confidence_a_b,
                rule.confidence_b_a,
                rule.lift
            )?;
        }
    }

    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        std::process::exit(1);
    }
}
