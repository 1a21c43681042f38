//! Integration tests for the wizard state machine: full walkthroughs,
//! result browsing, the single-result short-circuit, and undo behavior.

use omnom::{Attribute, Dataset, Record, Screen, TransitionError, Wizard, WizardStep};

fn record(name: &str, fish: bool, old: bool) -> Record {
    Record {
        name: name.to_string(),
        is_fine_dining: false,
        is_old: old,
        is_fish: fish,
        is_asian: false,
        is_experimental: false,
        is_cheesy: false,
    }
}

/// Records that agree on every attribute can never be told apart, so the
/// wizard walks through all questions and ends up browsing all of them.
fn indistinguishable(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| record(&format!("Clone {i}"), false, false))
        .collect();
    Dataset::new(records).unwrap()
}

/// Answer the open branch of the current question.
fn answer_open_branch(wizard: &mut Wizard) {
    let value = wizard.preview_count(true).is_some_and(|c| c > 0);
    wizard.answer(value).unwrap();
}

#[test]
fn test_full_walkthrough_reaches_browse() {
    let mut w = Wizard::new(indistinguishable(3));
    w.confirm().unwrap();
    w.start().unwrap();
    for _ in 0..Attribute::COUNT {
        answer_open_branch(&mut w);
    }
    assert_eq!(w.step(), WizardStep::Browse);
    assert_eq!(w.conditions().len(), Attribute::COUNT);
    let Screen::Browse { total, position, .. } = w.view() else {
        panic!("expected browse view");
    };
    assert_eq!(total, 3);
    assert_eq!(position, 0);
}

#[test]
fn test_result_cycling_wraps_forward_and_clamps_backward() {
    let mut w = Wizard::new(indistinguishable(3));
    w.confirm().unwrap();
    w.start().unwrap();
    for _ in 0..Attribute::COUNT {
        answer_open_branch(&mut w);
    }

    // Forward three times over three results lands back on the first.
    for _ in 0..3 {
        w.cycle_forward().unwrap();
    }
    let Screen::Browse { position, .. } = w.view() else {
        panic!("expected browse view");
    };
    assert_eq!(position, 0);

    // Backward from zero stays at zero, never negative.
    w.cycle_backward().unwrap();
    w.cycle_backward().unwrap();
    let Screen::Browse { position, .. } = w.view() else {
        panic!("expected browse view");
    };
    assert_eq!(position, 0);
}

#[test]
fn test_cycling_distinct_results_visits_each_in_order() {
    let mut w = Wizard::new(indistinguishable(3));
    w.confirm().unwrap();
    w.start().unwrap();
    for _ in 0..Attribute::COUNT {
        answer_open_branch(&mut w);
    }

    let mut names = Vec::new();
    for _ in 0..3 {
        let Screen::Browse { record, .. } = w.view() else {
            panic!("expected browse view");
        };
        names.push(record.name.clone());
        w.cycle_forward().unwrap();
    }
    assert_eq!(names, vec!["Clone 0", "Clone 1", "Clone 2"]);
}

#[test]
fn test_back_from_browse_reopens_last_question() {
    let mut w = Wizard::new(indistinguishable(2));
    w.confirm().unwrap();
    w.start().unwrap();
    for _ in 0..Attribute::COUNT {
        answer_open_branch(&mut w);
    }
    assert_eq!(w.step(), WizardStep::Browse);

    w.back();
    assert_eq!(w.step(), WizardStep::Question(Attribute::COUNT - 1));
    assert_eq!(w.conditions().len(), Attribute::COUNT - 1);
    assert_eq!(w.browse_index(), 0);
}

#[test]
fn test_single_result_short_circuits_remaining_questions() {
    // The worked example: is_fish splits 2/2, is_old splits 1/3, so the
    // wizard asks about is_fish first; fishy-then-old pins down record A.
    let dataset = Dataset::new(vec![
        record("A", true, true),
        record("B", true, false),
        record("C", false, false),
        record("D", false, false),
    ])
    .unwrap();
    let mut w = Wizard::new(dataset);
    assert_eq!(w.order().get(0), Some(Attribute::IsFish));

    w.confirm().unwrap();
    w.start().unwrap();
    w.answer(true).unwrap();
    assert_eq!(w.candidates().len(), 2);
    assert!(!w.is_settled());

    assert_eq!(w.active_attribute(), Some(Attribute::IsOld));
    w.answer(true).unwrap();
    assert!(w.is_settled());
    let Screen::SingleResult(only) = w.view() else {
        panic!("expected single result, got {:?}", w.view());
    };
    assert_eq!(only.name, "A");

    // Only back and reset apply now.
    assert_eq!(w.answer(true), Err(TransitionError::AlreadySettled));
    w.back();
    assert!(!w.is_settled());
    assert_eq!(w.candidates().len(), 2);
}

#[test]
fn test_singleton_dataset_is_settled_from_the_start() {
    let w = Wizard::new(Dataset::new(vec![record("Only", true, true)]).unwrap());
    assert!(w.is_settled());
    let Screen::SingleResult(only) = w.view() else {
        panic!("expected single result view");
    };
    assert_eq!(only.name, "Only");
}

#[test]
fn test_random_peek_is_not_reachable_from_browse() {
    let mut w = Wizard::new(indistinguishable(2));
    w.confirm().unwrap();
    w.start().unwrap();
    for _ in 0..Attribute::COUNT {
        answer_open_branch(&mut w);
    }
    assert_eq!(w.step(), WizardStep::Browse);
    assert!(matches!(
        w.random_peek_at(0),
        Err(TransitionError::FromTerminalStep { .. })
    ));
}

#[test]
fn test_random_peek_shows_full_dataset_despite_conditions() {
    // Condition on fishy, then peek: the peek may surface a meaty record.
    let dataset = Dataset::new(vec![
        record("Fishy", true, false),
        record("Meaty A", false, false),
        record("Meaty B", false, true),
    ])
    .unwrap();
    let mut w = Wizard::new(dataset);
    w.confirm().unwrap();
    w.start().unwrap();
    // is_old and is_fish tie at 1/2, so the declared-first is_old is asked;
    // answer towards the two-record side.
    assert_eq!(w.active_attribute(), Some(Attribute::IsOld));
    w.answer(false).unwrap();

    w.random_peek_at(2).unwrap();
    let Screen::RandomPeek(peeked) = w.view() else {
        panic!("expected random peek view");
    };
    assert_eq!(peeked.name, "Meaty B");

    // Exit is only via reset.
    w.back();
    assert_eq!(w.step(), WizardStep::RandomPeek);
    w.reset();
    assert_eq!(w.step(), WizardStep::Welcome);
}

#[test]
fn test_undo_chain_back_to_welcome() {
    let mut w = Wizard::new(indistinguishable(2));
    w.confirm().unwrap();
    w.start().unwrap();
    answer_open_branch(&mut w);
    answer_open_branch(&mut w);
    assert_eq!(w.step(), WizardStep::Question(2));

    for _ in 0..10 {
        w.back();
    }
    // Floored at welcome with everything undone.
    assert_eq!(w.step(), WizardStep::Welcome);
    assert!(w.conditions().is_empty());
}
