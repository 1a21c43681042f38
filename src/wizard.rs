//! Wizard state machine
//!
//! The authoritative source of truth for wizard progress. It enforces valid
//! state transitions and makes it impossible to narrow the candidate set to
//! zero through its own operations.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: the [`Wizard`] owns the current step, the
//!   answered conditions, and the result-browsing cursor
//! - **Validated Transitions**: answering a branch with no remaining
//!   candidates is rejected, never executed
//! - **Explicit History**: every forward answer pushes `(attribute, value)`
//!   onto a stack and `back` pops it, so undo stays correct across the
//!   single-result short-circuit
//! - **No Panics**: rejected transitions return [`TransitionError`]
//!
//! # Step Flow
//!
//! ```text
//! Welcome
//!     ↓ confirm
//! Intro
//!     ↓ start
//! Question(0) → Question(1) → ... → Question(N-1)
//!     ↓ answer(value) at each question
//! Browse                       (several candidates remain)
//!
//! (Welcome, Intro and any Question can jump to RandomPeek;
//!  RandomPeek exits only via reset.
//!  Whenever exactly one candidate remains the presented view is the
//!  single-result terminal, regardless of the numeric step.)
//! ```

use crate::dataset::{Attribute, Dataset, Record};
use crate::filter::{filter, Condition};
use crate::ranker::{rank_attributes, AttributeOrder};
use rand::Rng as _;
use std::fmt;
use thiserror::Error;

/// The wizard's position in the question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Confirmation prompt shown before anything else.
    Welcome,
    /// Introduction screen with start / random / reset choices.
    Intro,
    /// Question `i` of the ranked attribute order, `i` in `0..N`.
    Question(usize),
    /// All questions answered and several candidates remain; the browse
    /// cursor cycles through them.
    Browse,
    /// Side mode showing one uniformly random record, ignoring conditions.
    RandomPeek,
}

impl WizardStep {
    /// Step number for display (Welcome = 0, first question = 2).
    pub const fn step_number(self) -> usize {
        match self {
            Self::Welcome | Self::RandomPeek => 0,
            Self::Intro => 1,
            Self::Question(i) => 2 + i,
            Self::Browse => 2 + Attribute::COUNT,
        }
    }

    /// True for the steps the wizard cannot leave by answering questions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Browse)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Intro => write!(f, "intro"),
            Self::Question(i) => write!(f, "question {}", i + 1),
            Self::Browse => write!(f, "result browsing"),
            Self::RandomPeek => write!(f, "random peek"),
        }
    }
}

/// Rejected wizard transitions.
///
/// These are recoverable and expected to be unreachable through the view
/// layer, which disables the corresponding inputs. They exist so that a
/// misbehaving caller gets an error instead of a corrupted candidate set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// `confirm`/`decline` outside the welcome step
    #[error("confirmation is only possible at the welcome step (currently {step})")]
    NotAtWelcome { step: WizardStep },

    /// `start` outside the intro step
    #[error("starting is only possible at the intro step (currently {step})")]
    NotAtIntro { step: WizardStep },

    /// `answer` outside a question step
    #[error("answering is only possible at a question step (currently {step})")]
    NotAtQuestion { step: WizardStep },

    /// `answer` on a branch whose preview count is zero
    #[error("no candidates remain for {attribute} = {value}")]
    ExhaustedBranch { attribute: Attribute, value: bool },

    /// `answer` while the single-result short-circuit is presented
    #[error("a single candidate already remains; only back and reset apply")]
    AlreadySettled,

    /// `cycle_*` outside the browse step
    #[error("result cycling is only possible at the browse step (currently {step})")]
    NotBrowsing { step: WizardStep },

    /// `random_peek` from a terminal step
    #[error("random peek is not reachable from {step}")]
    FromTerminalStep { step: WizardStep },
}

/// One of the two candidate answers at a question step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerPreview {
    /// The boolean this answer would record for the active attribute.
    pub value: bool,
    /// How many candidates would remain after choosing it. Zero means the
    /// answer is unavailable and the view shows the exhausted message.
    pub count: usize,
}

impl AnswerPreview {
    /// True if this answer can be chosen.
    pub const fn available(self) -> bool {
        self.count > 0
    }
}

/// What the view layer should present, after applying the random-peek and
/// single-result short-circuits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Welcome/confirmation prompt.
    Welcome,
    /// Intro/start prompt.
    Intro,
    /// An active question with per-answer candidate previews, presented in
    /// the attribute's preferred answer order.
    Question {
        /// Zero-based index into the attribute order.
        index: usize,
        /// Total number of questions.
        total: usize,
        /// The attribute this question asks about.
        attribute: Attribute,
        /// Candidates matching the conditions accumulated so far.
        remaining: usize,
        /// The two candidate answers in presentation order.
        answers: [AnswerPreview; 2],
    },
    /// Exactly one candidate remains; only back and reset apply.
    SingleResult(&'a Record),
    /// Several candidates remain after all questions.
    Browse {
        record: &'a Record,
        /// Zero-based position of `record` among the results.
        position: usize,
        total: usize,
    },
    /// One uniformly random record from the full dataset.
    RandomPeek(&'a Record),
}

/// The interactive elimination wizard.
///
/// Owns the dataset, the attribute order computed once at construction, and
/// all mutable session state. Rebuilt fresh for each session; there is no
/// persistence.
#[derive(Debug, Clone)]
pub struct Wizard {
    dataset: Dataset,
    order: AttributeOrder,
    step: WizardStep,
    /// Answers in the order they were given; `back` pops the newest.
    history: Vec<Condition>,
    /// Raw browse cursor; the presented position is `browse_index % results`.
    browse_index: usize,
    /// Index of the record shown in random-peek mode.
    peeked: usize,
}

impl Wizard {
    /// Create a wizard over a validated dataset.
    ///
    /// Ranks the attributes once and caches the order for the session.
    pub fn new(dataset: Dataset) -> Self {
        let order = rank_attributes(&dataset);
        tracing::info!(records = dataset.len(), order = ?order.as_slice(), "wizard ready");
        Self {
            dataset,
            order,
            step: WizardStep::Welcome,
            history: Vec::with_capacity(Attribute::COUNT),
            browse_index: 0,
            peeked: 0,
        }
    }

    /// The dataset this wizard filters.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The cached question order.
    pub fn order(&self) -> &AttributeOrder {
        &self.order
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The conditions accumulated so far, oldest first.
    pub fn conditions(&self) -> &[Condition] {
        &self.history
    }

    /// The raw browse cursor.
    pub fn browse_index(&self) -> usize {
        self.browse_index
    }

    /// Candidates matching the accumulated conditions, in dataset order.
    pub fn candidates(&self) -> Vec<&Record> {
        filter(&self.dataset, &self.history)
    }

    /// True when exactly one candidate remains and the presented view is the
    /// single-result terminal, regardless of the numeric step.
    pub fn is_settled(&self) -> bool {
        self.step != WizardStep::RandomPeek && self.candidates().len() == 1
    }

    /// The attribute asked about at the current step, if it is a question.
    pub fn active_attribute(&self) -> Option<Attribute> {
        match self.step {
            WizardStep::Question(i) => self.order.get(i),
            _ => None,
        }
    }

    /// How many candidates would remain after answering `value` at the
    /// current question, or `None` outside a question step.
    pub fn preview_count(&self, value: bool) -> Option<usize> {
        let attribute = self.active_attribute()?;
        let mut conditions = self.history.clone();
        conditions.push((attribute, value));
        Some(filter(&self.dataset, &conditions).len())
    }

    /// Accept the welcome prompt.
    pub fn confirm(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Welcome {
            return Err(TransitionError::NotAtWelcome { step: self.step });
        }
        self.step = WizardStep::Intro;
        Ok(())
    }

    /// Decline the welcome prompt. No state change; returns the warning
    /// message for the view layer's side channel.
    pub fn decline(&self) -> Result<&'static str, TransitionError> {
        if self.step != WizardStep::Welcome {
            return Err(TransitionError::NotAtWelcome { step: self.step });
        }
        Ok("Life is all about choices, and today you chose wrong.")
    }

    /// Begin the question sequence.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Intro {
            return Err(TransitionError::NotAtIntro { step: self.step });
        }
        self.step = WizardStep::Question(0);
        Ok(())
    }

    /// Record an answer for the active question and advance.
    ///
    /// # Errors
    ///
    /// - `NotAtQuestion` outside a question step
    /// - `AlreadySettled` while the single-result short-circuit is presented
    /// - `ExhaustedBranch` if no candidate matches the chosen value; the
    ///   wizard never enters a zero-candidate state
    pub fn answer(&mut self, value: bool) -> Result<(), TransitionError> {
        let WizardStep::Question(i) = self.step else {
            return Err(TransitionError::NotAtQuestion { step: self.step });
        };
        if self.is_settled() {
            return Err(TransitionError::AlreadySettled);
        }
        // Question indices always resolve: the order is a permutation and
        // answer() never advances past the last attribute.
        let Some(attribute) = self.order.get(i) else {
            return Err(TransitionError::NotAtQuestion { step: self.step });
        };
        match self.preview_count(value) {
            Some(0) | None => Err(TransitionError::ExhaustedBranch { attribute, value }),
            Some(count) => {
                self.history.push((attribute, value));
                self.step = if i + 1 < self.order.len() {
                    WizardStep::Question(i + 1)
                } else {
                    WizardStep::Browse
                };
                tracing::debug!(%attribute, value, count, step = %self.step, "answer recorded");
                Ok(())
            }
        }
    }

    /// Step backwards, undoing the most recent answer.
    ///
    /// Floored at the welcome step; a no-op there and in random-peek mode,
    /// which exits only via [`Wizard::reset`].
    pub fn back(&mut self) {
        match self.step {
            WizardStep::Welcome | WizardStep::RandomPeek => {}
            WizardStep::Intro => self.step = WizardStep::Welcome,
            WizardStep::Question(0) => self.step = WizardStep::Intro,
            WizardStep::Question(i) => {
                self.history.pop();
                self.step = WizardStep::Question(i - 1);
            }
            WizardStep::Browse => {
                self.history.pop();
                self.browse_index = 0;
                self.step = WizardStep::Question(self.order.len() - 1);
            }
        }
    }

    /// Return to the welcome step and clear all accumulated state.
    pub fn reset(&mut self) {
        self.step = WizardStep::Welcome;
        self.history.clear();
        self.browse_index = 0;
    }

    /// Enter random-peek mode (or pick another record while already in it),
    /// showing one uniformly random record from the full dataset.
    pub fn random_peek(&mut self) -> Result<(), TransitionError> {
        let mut rng = rand::rng();
        let pick = rng.random_range(0..self.dataset.len());
        self.random_peek_at(pick)
    }

    /// Deterministic variant of [`Wizard::random_peek`] used by tests; the
    /// pick is taken modulo the dataset size.
    pub fn random_peek_at(&mut self, pick: usize) -> Result<(), TransitionError> {
        if self.step.is_terminal() {
            return Err(TransitionError::FromTerminalStep { step: self.step });
        }
        self.peeked = pick % self.dataset.len();
        self.step = WizardStep::RandomPeek;
        Ok(())
    }

    /// Advance the browse cursor; wraps around the result set.
    pub fn cycle_forward(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Browse {
            return Err(TransitionError::NotBrowsing { step: self.step });
        }
        self.browse_index = self.browse_index.saturating_add(1);
        Ok(())
    }

    /// Move the browse cursor backwards; clamped at zero.
    pub fn cycle_backward(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Browse {
            return Err(TransitionError::NotBrowsing { step: self.step });
        }
        self.browse_index = self.browse_index.saturating_sub(1);
        Ok(())
    }

    /// What the view layer should present right now.
    ///
    /// Applies the short-circuits in precedence order: random-peek first,
    /// then single-result, then the numeric step.
    pub fn view(&self) -> Screen<'_> {
        if self.step == WizardStep::RandomPeek {
            // peeked is always reduced modulo the dataset size on entry
            let record = &self.dataset.records()[self.peeked % self.dataset.len()];
            return Screen::RandomPeek(record);
        }

        let candidates = self.candidates();
        if let [only] = candidates.as_slice() {
            return Screen::SingleResult(only);
        }

        match self.step {
            WizardStep::Welcome => Screen::Welcome,
            WizardStep::Intro => Screen::Intro,
            WizardStep::Question(i) => {
                // active_attribute is Some for every reachable question index
                let attribute = self.order.get(i).unwrap_or(Attribute::IsFineDining);
                let presented = attribute.presented_answers();
                let preview = |value: bool| AnswerPreview {
                    value,
                    count: self.preview_count(value).unwrap_or(0),
                };
                Screen::Question {
                    index: i,
                    total: self.order.len(),
                    attribute,
                    remaining: candidates.len(),
                    answers: [preview(presented[0]), preview(presented[1])],
                }
            }
            WizardStep::Browse => {
                let position = self.browse_index % candidates.len();
                Screen::Browse {
                    record: candidates[position],
                    position,
                    total: candidates.len(),
                }
            }
            WizardStep::RandomPeek => unreachable!("handled above"),
        }
    }
}
