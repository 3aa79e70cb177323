use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExpenseSet {
    pub rent: f64,
    pub electricity: f64,
    pub gas: f64,
    pub maid: f64,
    pub wifi: f64,
}

impl ExpenseSet {
    // Fixed declaration order, shared by the breakdown display, the total
    // and the chart slices.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Rent", self.rent),
            ("Electricity", self.electricity),
            ("Gas", self.gas),
            ("Maid", self.maid),
            ("Wifi", self.wifi),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    Equal,
    Unequal,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PersistedState {
    pub expenses: ExpenseSet,
    pub total_members: u32,
}
