//! omnom library
//!
//! This library provides the core functionality for the omnom decision
//! wizard: the dataset, the question ranker, the filter engine, and the
//! wizard state machine. The binary wraps it in a ratatui interface.

pub mod app;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod ranker;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use dataset::{Attribute, Dataset, Record};
pub use error::{OmnomError, Result};
pub use filter::{filter, matching_count, Condition};
pub use ranker::{balance_score, rank_attributes, AttributeOrder};
pub use wizard::{AnswerPreview, Screen, TransitionError, Wizard, WizardStep};
