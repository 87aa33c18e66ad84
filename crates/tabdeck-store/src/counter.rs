//! Counter slice: a single integer and its three mutations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }

    pub fn increment_by_amount(&mut self, amount: i64) {
        self.value = self.value.wrapping_add(amount);
    }
}
