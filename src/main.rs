use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

mod chart;
mod prompt;
mod schemas;
mod split;
mod store;

use prompt::Prompter;
use schemas::{ExpenseSet, PersistedState, SplitMode};

const STORE_FILE: &str = "expenses.json";
const CHART_FILE: &str = "expense_breakdown.png";

fn main() -> Result<()> {
    env_logger::init();
    println!("{}", "Welcome to the Rent Calculator!".bold());

    let mut prompter = Prompter::stdin();
    let (expenses, total_members) = gather_session_state(&mut prompter);
    let total = split::total_cost(&expenses);

    println!();
    println!("{}", "Expense Breakdown:".bold());
    for (label, amount) in expenses.entries() {
        println!("{label:<12}: {amount:.2}");
    }
    println!("{:<12}: {total:.2}", "Total Cost");

    match prompter.split_mode() {
        SplitMode::Equal => {
            if let Some(per_person) = split::per_person(&expenses, total_members) {
                println!("{:<12}: {per_person:.2}", "Per Person");
            }
        }
        SplitMode::Unequal => {
            let contributions = prompter.unequal_contributions(total_members, total);
            println!();
            println!("{}", "Contributions:".bold());
            for (member, amount) in contributions.iter().enumerate() {
                println!("{:<12}: {amount:.2}", format!("Member {}", member + 1));
            }
        }
    }

    match prompter.confirm("\nGenerate expense pie chart? (Y/N): ") {
        Some(true) => match chart::render(&expenses, Path::new(CHART_FILE)) {
            Ok(()) => {
                log::info!("chart written to {CHART_FILE}");
                println!("Pie chart saved as '{CHART_FILE}'");
            }
            Err(err) => {
                log::warn!("chart rendering failed: {err}");
                println!("{}", format!("Error saving pie chart: {err}").red());
            }
        },
        Some(false) => {}
        None => println!("Input stream closed. Skipping pie chart generation."),
    }

    match prompter.confirm("Save data? (Y/N): ") {
        Some(true) => match store::save(&expenses, total_members, Path::new(STORE_FILE)) {
            Ok(()) => {
                log::info!("state written to {STORE_FILE}");
                println!("Data saved to {STORE_FILE}");
            }
            Err(err) => {
                log::warn!("saving state failed: {err}");
                println!("{}", format!("Error saving data: {err}").red());
            }
        },
        Some(false) => {}
        None => println!("Input stream closed. Data not saved."),
    }

    Ok(())
}

// Prior state is offered for reuse when it exists; every other path falls
// through to fresh collection. A stream that closes at the reuse question
// still collects (all-default) expenses and settles on a single member.
fn gather_session_state(prompter: &mut Prompter<impl BufRead, impl Write>) -> (ExpenseSet, u32) {
    match load_previous() {
        Some(state) => match prompter.confirm("Load previous data? (Y/N): ") {
            Some(true) => {
                println!("Loaded previous data.");
                (state.expenses, clamp_members(f64::from(state.total_members)))
            }
            Some(false) => collect_fresh(prompter),
            None => {
                println!("Input stream closed. Using default values.");
                (prompter.expenses(), 1)
            }
        },
        None => collect_fresh(prompter),
    }
}

fn load_previous() -> Option<PersistedState> {
    match store::load(Path::new(STORE_FILE)) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("discarding unreadable {STORE_FILE}: {err}");
            println!("{}", format!("Error loading data: {err}").red());
            None
        }
    }
}

fn collect_fresh(prompter: &mut Prompter<impl BufRead, impl Write>) -> (ExpenseSet, u32) {
    let expenses = prompter.expenses();
    let raw = prompter.positive_float("Enter the number of flat members: ", 1.0);
    (expenses, clamp_members(raw))
}

fn clamp_members(raw: f64) -> u32 {
    if raw < 1.0 {
        println!("Number of members set to 1 to avoid division by zero.");
    }
    split::coerce_member_count(raw)
}
