//! Filter engine
//!
//! A pure function over the dataset and the conditions accumulated so far.
//! This is the hot path of the wizard: it runs once per candidate answer per
//! rendered step to preview resulting counts. The dataset is tens of records,
//! so a linear scan is cheap enough that no memoization is needed.

use crate::dataset::{Attribute, Dataset, Record};

/// A single attribute-value assignment accumulated during the wizard.
pub type Condition = (Attribute, bool);

/// Records matching every condition exactly, in original dataset order.
///
/// Empty conditions return the full dataset; no hidden state, so calling
/// twice with the same arguments yields identical output.
pub fn filter<'a>(dataset: &'a Dataset, conditions: &[Condition]) -> Vec<&'a Record> {
    dataset
        .records()
        .iter()
        .filter(|record| {
            conditions
                .iter()
                .all(|&(attribute, value)| record.get(attribute) == value)
        })
        .collect()
}

/// Number of records matching every condition.
pub fn matching_count(dataset: &Dataset, conditions: &[Condition]) -> usize {
    filter(dataset, conditions).len()
}
