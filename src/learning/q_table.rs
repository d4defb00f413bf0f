//! Q-value storage

use std::{collections::HashMap, hash::Hash};

/// Storage and update rule for Q-values.
///
/// The Q-learning agent owns one of these and stays agnostic of whether
/// values are tabulated or approximated.
pub trait QFunction<S, A> {
    /// Current estimate of `Q(state, action)`.
    fn q_value(&self, state: &S, action: &A) -> f64;

    /// Move `Q(state, action)` by `step`, which is the TD correction already
    /// scaled by the learning rate.
    fn apply_correction(&mut self, state: &S, action: &A, step: f64);

    /// Called once when the learner exhausts its training budget.
    fn training_complete(&self) {}
}

/// Q-table mapping (state, action) pairs to Q-values
///
/// Unseen pairs read as `0.0`.
#[derive(Debug, Clone)]
pub struct QTable<S, A> {
    q_values: HashMap<S, HashMap<A, f64>>,
}

impl<S: Eq + Hash, A: Eq + Hash> PartialEq for QTable<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.q_values == other.q_values
    }
}

impl<S, A> Default for QTable<S, A> {
    fn default() -> Self {
        Self {
            q_values: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash + Clone, A: Eq + Hash + Clone> QTable<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &S, action: &A) -> f64 {
        self.q_values
            .get(state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: &S, action: &A, value: f64) {
        self.q_values
            .entry(state.clone())
            .or_default()
            .insert(action.clone(), value);
    }

    pub fn reset(&mut self) {
        self.q_values.clear();
    }

    /// Number of stored (state, action) entries
    pub fn size(&self) -> usize {
        self.q_values.values().map(HashMap::len).sum()
    }
}

impl<S: Eq + Hash + Clone, A: Eq + Hash + Clone> QFunction<S, A> for QTable<S, A> {
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.get(state, action)
    }

    fn apply_correction(&mut self, state: &S, action: &A, step: f64) {
        let value = self.get(state, action) + step;
        self.set(state, action, value);
    }

    fn training_complete(&self) {
        tracing::info!(entries = self.size(), "q-table training complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_pairs_are_zero() {
        let table: QTable<u8, char> = QTable::new();
        assert_eq!(table.get(&3, &'n'), 0.0);
        assert_eq!(table.size(), 0);
    }

    #[test]
    fn test_set_get() {
        let mut table = QTable::new();
        table.set(&"s", &'e', 1.5);
        table.set(&"s", &'w', -2.0);
        table.set(&"t", &'e', 0.25);
        assert_eq!(table.get(&"s", &'e'), 1.5);
        assert_eq!(table.get(&"s", &'w'), -2.0);
        assert_eq!(table.size(), 3);
    }

    #[test]
    fn test_apply_correction_accumulates() {
        let mut table = QTable::new();
        table.apply_correction(&0, &1, 0.5);
        table.apply_correction(&0, &1, 0.25);
        assert_eq!(table.q_value(&0, &1), 0.75);
    }

    #[test]
    fn test_reset() {
        let mut table = QTable::new();
        table.set(&0, &0, 1.0);
        table.reset();
        assert_eq!(table.size(), 0);
        assert_eq!(table.get(&0, &0), 0.0);
    }
}
