//! Dataset types for the decision wizard
//!
//! This module replaces stringly-typed attribute lookup with a proper Rust
//! enum that provides compile-time validation and exhaustive matching. Adding
//! or removing an attribute is a single localized change: extend [`Attribute`]
//! and the `match` arms below, and the compiler points at everything else.

use crate::error::{OmnomError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _};

/// The recognized boolean attributes of a candidate restaurant.
///
/// Declaration order is the tie-break order used by the question ranker, so
/// it must match the order the attributes appear in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    IsFineDining,
    IsOld,
    IsFish,
    IsAsian,
    IsExperimental,
    IsCheesy,
}

impl Attribute {
    /// Number of recognized attributes (the wizard's question count).
    pub const COUNT: usize = 6;

    /// All attributes in declaration order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The question asked about this attribute.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::IsFineDining => "Are we doing fancy fine dining or casual eating?",
            Self::IsOld => {
                "Are we trying a new place, or going somewhere we already know we'll be comfortable?"
            }
            Self::IsFish => "We're having something fishy or meaty?",
            Self::IsAsian => "Do we wanna have Asian or do we pretend to be white?",
            Self::IsExperimental => "How adventurous are we feeling?",
            Self::IsCheesy => "Do we wanna have something cheesy or nah?",
        }
    }

    /// Label for the answer button that records `value` for this attribute.
    pub const fn answer_label(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::IsFineDining, true) => "Fancy",
            (Self::IsFineDining, false) => "Casual",
            (Self::IsOld, true) => "Old & Comfortable",
            (Self::IsOld, false) => "New & Exciting",
            (Self::IsFish, true) => "Fishy",
            (Self::IsFish, false) => "Meaty",
            (Self::IsAsian, true) => "Asian",
            (Self::IsAsian, false) => "We White",
            (Self::IsExperimental, true) => "11/10",
            (Self::IsExperimental, false) => "9/10",
            (Self::IsCheesy, true) => "Cheesy",
            (Self::IsCheesy, false) => "No. Next.",
        }
    }

    /// Message shown in place of an answer whose preview count is zero.
    pub const fn exhausted_message(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::IsFineDining, true) => "You saah hip and trendy, no fancy for you.",
            (Self::IsFineDining, false) => "You saah fancy, no casual for you.",
            (Self::IsOld, true) => "Gotta go for something new.",
            (Self::IsOld, false) => "Your choices seem to prefer old and safe.",
            (Self::IsFish, true) => "There are no more fish in the sea.",
            (Self::IsFish, false) => "404: meat not found",
            (Self::IsAsian, true) => "Based on your choices, you might as well be white.",
            (Self::IsAsian, false) => "Only Asian restaurants are left in the running.",
            (Self::IsExperimental, true) => "Your choices be kinda safe today.",
            (Self::IsExperimental, false) => "With those choices it was always going to be experimental.",
            (Self::IsCheesy, true) => "404: cheesy restaurants not found",
            (Self::IsCheesy, false) => "Literally everything left is cheesy.",
        }
    }

    /// The order the two answers are presented in for this question.
    ///
    /// Most questions lead with the `true` branch; the "old vs new" question
    /// leads with "New & Exciting" (the `false` branch).
    pub const fn presented_answers(self) -> [bool; 2] {
        match self {
            Self::IsOld => [false, true],
            _ => [true, false],
        }
    }
}

/// One candidate restaurant: a display name plus a value for every
/// recognized attribute.
///
/// Missing attributes are a load-time configuration error, which serde
/// enforces by refusing to deserialize records with absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub name: String,
    pub is_fine_dining: bool,
    pub is_old: bool,
    pub is_fish: bool,
    pub is_asian: bool,
    pub is_experimental: bool,
    pub is_cheesy: bool,
}

impl Record {
    /// Value of the given attribute for this record.
    pub const fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::IsFineDining => self.is_fine_dining,
            Attribute::IsOld => self.is_old,
            Attribute::IsFish => self.is_fish,
            Attribute::IsAsian => self.is_asian,
            Attribute::IsExperimental => self.is_experimental,
            Attribute::IsCheesy => self.is_cheesy,
        }
    }
}

/// The default dataset compiled into the binary.
const EMBEDDED_DATASET: &str = include_str!("../data/restaurants.json");

/// A fixed, ordered, non-empty collection of candidate records.
///
/// Loaded once at startup and read-only for the lifetime of the session.
/// No operation mutates it after [`Dataset::new`] validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate and wrap an ordered list of records.
    ///
    /// # Errors
    ///
    /// Returns a dataset error if `records` is empty. Per-record attribute
    /// completeness is already guaranteed by the `Record` type.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(OmnomError::dataset(
                "dataset is empty; at least one restaurant is required",
            ));
        }
        Ok(Self { records })
    }

    /// Parse and validate a dataset from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load and validate a dataset from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading dataset");
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// The dataset compiled into the binary, used when no file is given.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// All records in their original order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: an empty dataset cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
