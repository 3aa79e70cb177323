use crate::schemas::ExpenseSet;

pub fn total_cost(expenses: &ExpenseSet) -> f64 {
    expenses.entries().into_iter().map(|(_, amount)| amount).sum()
}

pub fn per_person(expenses: &ExpenseSet, total_members: u32) -> Option<f64> {
    if total_members == 0 {
        return None;
    }
    Some(total_cost(expenses) / f64::from(total_members))
}

// Allow small float errors when comparing against the total
pub fn contributions_match(contributions: &[f64], total_cost: f64) -> bool {
    (contributions.iter().sum::<f64>() - total_cost).abs() <= 0.01
}

// Member counts arrive as floats from the prompt. The divisor has to be a
// whole number of people, at least one, and NaN must not slip through the
// comparison.
pub fn coerce_member_count(raw: f64) -> u32 {
    if raw >= 1.0 {
        raw as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpenseSet {
        ExpenseSet {
            rent: 500.0,
            electricity: 50.0,
            gas: 20.0,
            maid: 30.0,
            wifi: 40.0,
        }
    }

    #[test]
    fn total_is_the_sum_of_all_categories() {
        assert!((total_cost(&sample()) - 640.0).abs() < 1e-9);
    }

    #[test]
    fn total_does_not_depend_on_entry_order() {
        let expenses = sample();
        let forward: f64 = expenses.entries().into_iter().map(|(_, a)| a).sum();
        let backward: f64 = expenses.entries().into_iter().rev().map(|(_, a)| a).sum();
        assert!((forward - backward).abs() < 1e-9);
        assert!((forward - total_cost(&expenses)).abs() < 1e-9);
    }

    #[test]
    fn equal_split_recovers_the_total() {
        for members in 1..=7 {
            let per_person = per_person(&sample(), members).unwrap();
            assert!((per_person * f64::from(members) - 640.0).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_members_has_no_split() {
        assert_eq!(per_person(&sample(), 0), None);
    }

    #[test]
    fn contribution_check_tolerates_a_cent() {
        assert!(contributions_match(&[40.0, 59.99], 100.0));
        assert!(contributions_match(&[40.0, 60.0], 100.0));
    }

    #[test]
    fn contribution_check_flags_real_gaps() {
        assert!(!contributions_match(&[40.0, 50.0], 100.0));
        assert!(!contributions_match(&[], 100.0));
    }

    #[test]
    fn member_count_is_clamped_to_one() {
        assert_eq!(coerce_member_count(0.0), 1);
        assert_eq!(coerce_member_count(0.9), 1);
        assert_eq!(coerce_member_count(1.0), 1);
        assert_eq!(coerce_member_count(2.9), 2);
        assert_eq!(coerce_member_count(4.0), 4);
        assert_eq!(coerce_member_count(f64::NAN), 1);
    }
}
