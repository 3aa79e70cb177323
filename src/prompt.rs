use std::io::{self, BufRead, Write};

use crate::schemas::{ExpenseSet, SplitMode};
use crate::split;

// Every question the session asks goes through one of these. The reader and
// writer are generic so the whole dialogue can be driven from a buffer in
// tests; the real program wires it to stdin/stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // One trimmed line from the source. None covers both a closed stream
    // and an unreadable one; the callers treat those the same way.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{prompt}").ok()?;
        self.output.flush().ok()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn notice(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }

    pub fn positive_float(&mut self, prompt: &str, default: f64) -> f64 {
        loop {
            let Some(line) = self.read_line(prompt) else {
                self.notice(&format!(
                    "Invalid input or input stream closed. Using default value {default}."
                ));
                return default;
            };
            match line.parse::<f64>() {
                Ok(value) if value < 0.0 => {
                    self.notice("Value cannot be negative. Try again.");
                }
                Ok(value) => return value,
                Err(_) => {
                    self.notice(&format!(
                        "Invalid input or input stream closed. Using default value {default}."
                    ));
                    return default;
                }
            }
        }
    }

    pub fn expenses(&mut self) -> ExpenseSet {
        ExpenseSet {
            rent: self.positive_float("Enter the rent: ", 0.0),
            electricity: self.positive_float("Enter the electricity bill: ", 0.0),
            gas: self.positive_float("Enter the gas bill: ", 0.0),
            maid: self.positive_float("Enter the housemaid charge: ", 0.0),
            wifi: self.positive_float("Enter the amount of Wi-Fi bill: ", 0.0),
        }
    }

    pub fn split_mode(&mut self) -> SplitMode {
        loop {
            let Some(line) = self.read_line("Split equally (E) or unequally (U)? ") else {
                self.notice("Input stream closed. Defaulting to equal split.");
                return SplitMode::Equal;
            };
            match line.to_uppercase().as_str() {
                "E" => return SplitMode::Equal,
                "U" => return SplitMode::Unequal,
                _ => self.notice("Invalid choice. Enter 'E' or 'U'."),
            }
        }
    }

    // One amount per member. Unparseable input (or a closed stream) counts
    // the member at 0.0 and moves on; only a negative amount re-asks the
    // same member, so the result always holds total_members entries.
    pub fn unequal_contributions(&mut self, total_members: u32, total_cost: f64) -> Vec<f64> {
        let mut contributions = Vec::with_capacity(total_members as usize);
        self.notice(&format!("Total cost to split: {total_cost:.2}"));
        for member in 1..=total_members {
            loop {
                let prompt = format!("Enter contribution for member {member}: ");
                let Some(line) = self.read_line(&prompt) else {
                    self.notice("Invalid input or input stream closed. Using default value 0.");
                    contributions.push(0.0);
                    break;
                };
                match line.parse::<f64>() {
                    Ok(amount) if amount < 0.0 => {
                        self.notice("Contribution cannot be negative.");
                    }
                    Ok(amount) => {
                        contributions.push(amount);
                        break;
                    }
                    Err(_) => {
                        self.notice("Invalid input or input stream closed. Using default value 0.");
                        contributions.push(0.0);
                        break;
                    }
                }
            }
        }
        if !split::contributions_match(&contributions, total_cost) {
            self.notice("Warning: Contributions do not match total cost!");
        }
        contributions
    }

    // Y/N question. None means the stream closed before an answer arrived;
    // the caller picks the per-step default.
    pub fn confirm(&mut self, prompt: &str) -> Option<bool> {
        let line = self.read_line(prompt)?;
        Some(line.eq_ignore_ascii_case("y"))
    }
}
