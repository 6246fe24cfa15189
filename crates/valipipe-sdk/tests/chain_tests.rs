//! Integration tests for chain building and evaluation
//!
//! Registers operations through the facade and drives them end-to-end.

mod common;

use common::{scenario_facade, CallLog};
use valipipe_sdk::{Operation, OperationOptions, RuntimeError, SdkError, Valipipe, Value};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_filter() {
    let vp = scenario_facade();

    assert!(vp.check("isPositive", [5]).unwrap());
    assert!(!vp.check("isPositive", [-1]).unwrap());
}

#[test]
fn test_modifier_then_filter() {
    let vp = scenario_facade();

    let chain = vp.get("double").unwrap().then("isEven").unwrap();
    assert!(chain.check([3]).unwrap());
}

#[test]
fn test_wrapper_around_filter() {
    let vp = scenario_facade();

    let chain = vp.get("negate").unwrap().then("isString").unwrap();
    assert!(!chain.check(["x"]).unwrap());
    assert!(chain.check([1]).unwrap());
}

#[test]
fn test_partial_application() {
    let vp = scenario_facade();

    let step = vp.get("between").unwrap().call([0]).unwrap();
    assert!(!step.is_resolved());

    let step = step.into_partial().unwrap().call([10]).unwrap();
    assert!(!step.is_resolved());

    let done = step.into_partial().unwrap().call([5]).unwrap();
    assert_eq!(done.result(), Some(true));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_reregistration_keeps_original() {
    let vp = scenario_facade();

    let replaced = vp.register_validator(
        "isPositive",
        Operation::unary(|_| true),
        OperationOptions::new().wrapping(true),
    );

    assert!(!replaced);
    assert!(!vp.check("isPositive", [-1]).unwrap());
}

#[test]
fn test_set_rejected() {
    let vp = scenario_facade();

    let err = vp.set("isPositive", Operation::unary(|_| true)).unwrap_err();
    assert!(matches!(err, SdkError::ReadOnlyFacade { .. }));
    assert!(!vp.check("isPositive", [-1]).unwrap());
}

// ============================================================================
// Short-circuit and threading
// ============================================================================

#[test]
fn test_filter_chain_short_circuits() {
    let vp = Valipipe::new();
    let log = CallLog::default();

    vp.register_validator("first", log.filter("first", true), OperationOptions::default());
    vp.register_validator("second", log.filter("second", false), OperationOptions::default());
    vp.register_validator("third", log.filter("third", true), OperationOptions::default());

    let chain = vp
        .get("first")
        .unwrap()
        .then("second")
        .unwrap()
        .then("third")
        .unwrap();

    assert!(!chain.check([1]).unwrap());
    assert_eq!(log.calls(), vec!["first", "second"]);
}

#[test]
fn test_all_filters_pass() {
    let vp = Valipipe::new();
    let log = CallLog::default();

    vp.register_validator("a", log.filter("a", true), OperationOptions::default());
    vp.register_validator("b", log.filter("b", true), OperationOptions::default());

    assert!(vp.get("a").unwrap().then("b").unwrap().check(["v"]).unwrap());
    assert_eq!(log.calls(), vec!["a", "b"]);
}

#[test]
fn test_long_chain_evaluates() {
    let vp = Valipipe::with_builtins();

    let mut chain = vp.get("string").unwrap();
    for _ in 0..10_000 {
        chain = chain.then("string").unwrap();
    }
    assert_eq!(chain.stack_len(), 10_000);

    assert!(chain.check(["x"]).unwrap());
    assert!(!chain.check([1]).unwrap());

    let negated = vp.get("not").unwrap().then("string").unwrap();
    let mut negated = (0..5_000).try_fold(negated, |c, _| c.then("string")).unwrap();
    negated = negated.then("len").unwrap().then("gt").unwrap();
    let negated = negated.call([3]).unwrap().into_partial().unwrap();
    assert!(negated.check(["ab"]).unwrap());
    assert!(!negated.check(["abcd"]).unwrap());
}

#[test]
fn test_modifier_value_reaches_every_later_entry() {
    let vp = scenario_facade();
    vp.register_validator(
        "isSix",
        Operation::unary(|v| *v == Value::from(6)),
        OperationOptions::default(),
    );

    let chain = vp
        .get("double")
        .unwrap()
        .then("isPositive")
        .unwrap()
        .then("isEven")
        .unwrap()
        .then("isSix")
        .unwrap();

    assert!(chain.check([3]).unwrap());
    assert!(!chain.check([4]).unwrap());
}

#[test]
fn test_wrapper_receives_remainder_outcome() {
    let vp = scenario_facade();
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let record = std::sync::Arc::clone(&seen);

    vp.register_validator(
        "spy",
        Operation::unary(move |b| {
            record.lock().unwrap().push(b.clone());
            Value::from("wrapper decides")
        }),
        OperationOptions::new().wrapping(true),
    );

    let chain = vp
        .get("isPositive")
        .unwrap()
        .then("spy")
        .unwrap()
        .then("isEven")
        .unwrap();

    // truthy string from the wrapper is the final outcome
    assert!(chain.check([3]).unwrap());
    assert!(chain.check([4]).unwrap());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Value::Bool(false), Value::Bool(true)]
    );
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn test_not_pipeable_in_chain() {
    let vp = scenario_facade();
    vp.register_validator(
        "strict",
        Operation::unary(|v| v.as_str() == Some("strict")),
        OperationOptions::new().pipeable(false),
    );

    let err = vp.get("isString").unwrap().then("strict").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::NotPipeable {
            name: "strict".to_string()
        }
    );

    // fine as an entry point
    assert!(vp.check("strict", ["strict"]).unwrap());
    assert!(!vp.check("strict", ["loose"]).unwrap());
}

#[test]
fn test_bare_wrapper_is_error() {
    let vp = scenario_facade();

    let err = vp.check("negate", [true]).unwrap_err();
    assert!(matches!(
        err,
        SdkError::RuntimeError(RuntimeError::InvalidWrappingUse { ref name }) if name == "negate"
    ));
}

#[test]
fn test_unknown_name_in_chain() {
    let vp = scenario_facade();

    let err = vp.get("isString").unwrap().then("nope").unwrap_err();
    assert_eq!(err, RuntimeError::UnknownOperation("nope".to_string()));
}

// ============================================================================
// Partial application in chains
// ============================================================================

#[test]
fn test_partial_then_chain() {
    let vp = scenario_facade();

    let in_range_and_even = vp
        .get("between")
        .unwrap()
        .call([0, 10])
        .unwrap()
        .into_partial()
        .unwrap()
        .then("isEven")
        .unwrap();

    assert!(in_range_and_even.check([4]).unwrap());
    assert!(!in_range_and_even.check([5]).unwrap());
    assert!(!in_range_and_even.check([12]).unwrap());
}

#[test]
fn test_partial_reused_independently() {
    let vp = scenario_facade();

    let small = vp
        .get("between")
        .unwrap()
        .call([0, 10])
        .unwrap()
        .into_partial()
        .unwrap();

    let results: Vec<bool> = [1, 50, 9, -3]
        .into_iter()
        .map(|v| small.check([v]).unwrap())
        .collect();

    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn test_surplus_arguments_complete_immediately() {
    let vp = scenario_facade();
    assert!(vp.check("between", [0, 10, 5]).unwrap());
    assert!(vp.check("between", [0, 10, 5, 99]).unwrap());
}

#[test]
fn test_check_on_incomplete_call() {
    let vp = scenario_facade();

    let err = vp.check("between", [0]).unwrap_err();
    assert!(matches!(
        err,
        SdkError::RuntimeError(RuntimeError::IncompleteInvocation { remaining: 2, .. })
    ));
}
