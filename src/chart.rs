use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::schemas::ExpenseSet;
use crate::split;

// Fixed qualitative palette, one colour per category.
const PALETTE: [RGBColor; 5] = [
    RGBColor(166, 206, 227),
    RGBColor(31, 120, 180),
    RGBColor(178, 223, 138),
    RGBColor(51, 160, 44),
    RGBColor(251, 154, 153),
];

const CANVAS: (u32, u32) = (800, 600);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("nothing to chart, all expense amounts are zero")]
    Empty,
    #[error("rendering failed: {0}")]
    Render(String),
}

fn slice_data(expenses: &ExpenseSet) -> (Vec<String>, Vec<f64>) {
    expenses
        .entries()
        .into_iter()
        .map(|(label, amount)| (label.to_string(), amount))
        .unzip()
}

// One slice per category, labelled with its share of the total. A set that
// sums to zero has no defined slice angles and is rejected up front.
pub fn render(expenses: &ExpenseSet, path: &Path) -> Result<(), ChartError> {
    if split::total_cost(expenses) <= 0.0 {
        return Err(ChartError::Empty);
    }
    let (labels, amounts) = slice_data(expenses);

    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;
    let title_style = TextStyle::from(("sans-serif", 30).into_font());
    let root = root
        .titled("Expense Breakdown", title_style)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let center = (CANVAS.0 as i32 / 2, CANVAS.1 as i32 / 2);
    let radius = 220.0;
    let mut pie = Pie::new(&center, &radius, &amounts, &PALETTE, &labels);
    pie.start_angle(140.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font());

    root.draw(&pie)
        .map_err(|e| ChartError::Render(e.to_string()))?;
    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_expenses_are_rejected() {
        let expenses = ExpenseSet {
            rent: 0.0,
            electricity: 0.0,
            gas: 0.0,
            maid: 0.0,
            wifi: 0.0,
        };
        let target = std::env::temp_dir().join("never_written.png");
        assert!(matches!(render(&expenses, &target), Err(ChartError::Empty)));
    }

    #[test]
    fn slice_data_keeps_every_category() {
        let expenses = ExpenseSet {
            rent: 500.0,
            electricity: 50.0,
            gas: 20.0,
            maid: 30.0,
            wifi: 40.0,
        };
        let (labels, amounts) = slice_data(&expenses);
        assert_eq!(labels, vec!["Rent", "Electricity", "Gas", "Maid", "Wifi"]);
        assert_eq!(amounts, vec![500.0, 50.0, 20.0, 30.0, 40.0]);
    }
}
