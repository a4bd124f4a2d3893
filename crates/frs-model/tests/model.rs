//! Tests for the stateful form model: invalidation, coercion, reset,
//! subscriptions, and the snapshot contract.

use std::cell::RefCell;
use std::rc::Rc;

use frs_model::{Inputs, Model, ModelError, NumericField, RiskFactor, Sex, Snapshot};

#[test]
fn defaults_match_questionnaire() {
    let model = Model::new();
    let snapshot = model.snapshot();

    assert_eq!(snapshot.age, 65);
    assert_eq!(snapshot.sex, Sex::Female);
    assert_eq!(snapshot.weight, 51.0);
    assert_eq!(snapshot.height, 164.0);
    assert_eq!(snapshot.t_score, Some(-2.74));
    assert_eq!(snapshot.risk_count, 0);
    assert_eq!(snapshot.bmi, 19.0);
    assert_eq!(snapshot.result, None);
}

#[test]
fn compute_stores_default_estimate() {
    let mut model = Model::new();
    model.compute();

    let result = model.snapshot().result.expect("result after compute");
    assert_eq!(result.major, 2.1);
    assert_eq!(result.hip, 1.0);
}

#[test]
fn compute_is_idempotent() {
    let mut model = Model::new();
    model.compute();
    let first = model.snapshot();
    model.compute();
    assert_eq!(model.snapshot(), first);
}

/// Every input mutation clears the stored result; only `compute` brings
/// it back.
#[test]
fn any_mutation_invalidates_result() {
    let mutations: Vec<Box<dyn Fn(&mut Model)>> = vec![
        Box::new(|m| m.set_field(NumericField::Age, "70")),
        Box::new(|m| m.set_field(NumericField::Weight, "60")),
        Box::new(|m| m.set_field(NumericField::Height, "170")),
        Box::new(|m| m.set_field(NumericField::TScore, "-1.5")),
        Box::new(|m| m.set_sex(Sex::Male)),
        Box::new(|m| m.toggle_flag(RiskFactor::Smoking)),
    ];

    for mutate in mutations {
        let mut model = Model::new();
        model.compute();
        assert!(model.snapshot().result.is_some());

        mutate(&mut model);
        assert_eq!(model.snapshot().result, None);
    }
}

/// Toggling a flag after computing drops the result without a further
/// compute call.
#[test]
fn smoking_toggle_clears_computed_result() {
    let mut model = Model::new();
    model.compute();
    assert_eq!(model.result().map(|r| (r.major, r.hip)), Some((2.1, 1.0)));

    model.toggle_flag(RiskFactor::Smoking);
    assert_eq!(model.result(), None);
    assert!(model.snapshot().flags.smoking);
}

#[test]
fn reset_restores_defaults() {
    let mut model = Model::new();
    model.set_field(NumericField::Age, "82");
    model.set_field(NumericField::Weight, "70");
    model.set_sex(Sex::Male);
    model.toggle_flag(RiskFactor::Ra);
    model.toggle_flag(RiskFactor::Alcohol3);
    model.compute();

    model.reset();

    assert_eq!(model.snapshot(), Model::new().snapshot());
    assert_eq!(*model.inputs(), Inputs::default());
    assert_eq!(model.result(), None);
}

// --- coercion ---

#[test]
fn non_numeric_input_coerces_to_zero() {
    let mut model = Model::new();

    model.set_field(NumericField::Age, "abc");
    assert_eq!(model.snapshot().age, 0);

    model.set_field(NumericField::Weight, "heavy");
    assert_eq!(model.snapshot().weight, 0.0);

    model.set_field(NumericField::Height, "");
    assert_eq!(model.snapshot().height, 0.0);
}

#[test]
fn fractional_age_truncates() {
    let mut model = Model::new();
    model.set_field(NumericField::Age, "65.9");
    assert_eq!(model.snapshot().age, 65);
}

/// An empty T-score is "no BMD" - a distinct state, not zero.
#[test]
fn empty_t_score_is_absent() {
    let mut model = Model::new();

    model.set_field(NumericField::TScore, "");
    assert_eq!(model.snapshot().t_score, None);

    model.set_field(NumericField::TScore, "   ");
    assert_eq!(model.snapshot().t_score, None);

    model.set_field(NumericField::TScore, "0");
    assert_eq!(model.snapshot().t_score, Some(0.0));

    model.set_field(NumericField::TScore, "junk");
    assert_eq!(model.snapshot().t_score, Some(0.0));
}

// --- string-keyed flag access ---

#[test]
fn toggle_flag_by_wire_key() {
    let mut model = Model::new();

    model.toggle_flag_named("smoking").expect("known key");
    assert!(model.snapshot().flags.smoking);

    model.toggle_flag_named("smoking").expect("known key");
    assert!(!model.snapshot().flags.smoking);
}

#[test]
fn unknown_flag_key_is_rejected() {
    let mut model = Model::new();
    let before = model.snapshot();

    let err = model.toggle_flag_named("bmi").unwrap_err();
    assert_eq!(err, ModelError::UnknownFlag("bmi".to_owned()));

    // Nothing changed, including the result.
    assert_eq!(model.snapshot(), before);
}

/// The serialized flag record has exactly the seven declared keys.
#[test]
fn flag_record_has_exactly_seven_keys() {
    let snapshot = Model::new().snapshot();
    let json = serde_json::to_value(snapshot.flags).expect("serialize flags");

    let object = json.as_object().expect("flags serialize to an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();

    let mut expected: Vec<&str> = RiskFactor::ALL.iter().map(|f| f.key()).collect();
    expected.sort_unstable();

    assert_eq!(keys, expected);
}

#[test]
fn snapshot_serializes() {
    let mut model = Model::new();
    model.compute();
    let snapshot = model.snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let round: Snapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(round, snapshot);
}

// --- subscriptions ---

#[test]
fn listeners_fire_in_registration_order() {
    let mut model = Model::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    model.subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    model.subscribe(move |_| second.borrow_mut().push("second"));

    model.set_sex(Sex::Male);

    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn listener_sees_post_change_snapshot() {
    let mut model = Model::new();
    let seen = Rc::new(RefCell::new(None));

    let sink = Rc::clone(&seen);
    model.subscribe(move |snapshot: &Snapshot| {
        *sink.borrow_mut() = Some(snapshot.clone());
    });

    model.compute();

    let snapshot = seen.borrow().clone().expect("listener fired");
    assert!(snapshot.result.is_some());
    assert_eq!(snapshot, model.snapshot());
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut model = Model::new();
    let count = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&count);
    let id = model.subscribe(move |_| *sink.borrow_mut() += 1);

    model.compute();
    assert_eq!(*count.borrow(), 1);

    model.unsubscribe(id);
    model.reset();
    assert_eq!(*count.borrow(), 1);
}
