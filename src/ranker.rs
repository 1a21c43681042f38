//! Question ranker
//!
//! Decides the order the wizard asks about attributes. The ranking is a pure
//! function of the dataset and runs exactly once per load; the owning wizard
//! caches the result for the session.
//!
//! For each attribute we count the records where it is `false` (the false
//! branch is the counted direction) and score the attribute by the size of
//! the larger of the two partitions it induces. A low score means the
//! attribute splits the dataset close to evenly, which prunes the candidate
//! set fastest in the worst case, so low-scoring attributes are asked first
//! and heavily skewed ones sink to the end. Ties keep the declaration order
//! of [`Attribute`].

use crate::dataset::{Attribute, Dataset};

/// The fixed sequence in which the wizard asks about attributes.
///
/// Invariant: a permutation of exactly the recognized attributes, sorted so
/// the most evenly splitting attribute comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeOrder {
    order: Vec<Attribute>,
}

impl AttributeOrder {
    /// The attribute asked about at question index `i`, if in range.
    pub fn get(&self, i: usize) -> Option<Attribute> {
        self.order.get(i).copied()
    }

    /// Position of an attribute in the question sequence.
    pub fn position(&self, attribute: Attribute) -> Option<usize> {
        self.order.iter().position(|&a| a == attribute)
    }

    /// The full sequence.
    pub fn as_slice(&self) -> &[Attribute] {
        &self.order
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a ranked order over a non-empty attribute set.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Size of the larger partition the attribute would induce on the dataset.
///
/// `max(false_count, total - false_count)`; lower is more evenly splitting.
pub fn balance_score(dataset: &Dataset, attribute: Attribute) -> usize {
    let false_count = dataset
        .records()
        .iter()
        .filter(|record| !record.get(attribute))
        .count();
    false_count.max(dataset.len() - false_count)
}

/// Rank all recognized attributes by discriminative power.
///
/// Stable sort ascending by [`balance_score`], so evenly splitting
/// attributes are asked first and ties preserve declaration order.
pub fn rank_attributes(dataset: &Dataset) -> AttributeOrder {
    let mut order = Attribute::all();
    order.sort_by_key(|&attribute| balance_score(dataset, attribute));
    tracing::debug!(?order, "ranked attributes");
    AttributeOrder { order }
}
