//! Property-based tests for the formula interpreter.
//!
//! Random arithmetic trees are rendered to source and checked against the
//! same computation done directly in `f64`, and random formulas are checked
//! to survive a render and reparse unchanged.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use formulae::{Environment, Formula, evaluate};
use proptest::prelude::*;

/// An arithmetic tree paired with its source text and its value.
#[derive(Debug, Clone)]
struct Sample {
    source: String,
    value:  f64,
}

fn literal_strategy() -> impl Strategy<Value = Sample> {
    (0_u16..1000).prop_map(|n| Sample { source: n.to_string(),
                                        value:  f64::from(n), })
}

/// Fully parenthesized `+`, `-` and `*` trees, so source order matches the
/// order of the direct computation.
fn arithmetic_strategy() -> impl Strategy<Value = Sample> {
    literal_strategy().prop_recursive(4, 32, 2, |inner| {
                          (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner)
                              .prop_map(|(l, op, r)| {
                                  let value = match op {
                                      '+' => l.value + r.value,
                                      '-' => l.value - r.value,
                                      _ => l.value * r.value,
                                  };
                                  Sample { source: format!("({} {op} {})", l.source, r.source),
                                           value }
                              })
                      })
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,6}").expect("valid regex")
}

/// Syntactically valid formulas over variables, calls and every operator.
fn formula_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0_u16..100).prop_map(|n| n.to_string()), identifier_strategy()];
    leaf.prop_recursive(3, 24, 3, |inner| {
            prop_oneof![
                (inner.clone(),
                 prop::sample::select(vec!["+", "-", "*", "/", "%", "^", "<", ">", "<=", ">=",
                                           "==", "!="]),
                 inner.clone())
                    .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                inner.clone().prop_map(|e| format!("({e})")),
                (identifier_strategy(), prop::collection::vec(inner.clone(), 0..3))
                    .prop_map(|(name, args)| format!("{name}({})", args.join(", "))),
                // Quotes do not nest, so only quote-free bodies become sub-formulas.
                (identifier_strategy(), inner).prop_map(|(name, e)| {
                                                   if e.contains('"') {
                                                       format!("({e})")
                                                   } else {
                                                       format!("\"{name} = {e}\"")
                                                   }
                                               }),
            ]
        })
}

proptest! {
    #[test]
    fn arithmetic_matches_direct_computation(sample in arithmetic_strategy()) {
        let mut env = Environment::new();
        let result = evaluate(&sample.source, &mut env).unwrap();
        prop_assert_eq!(result, sample.value, "source: {}", sample.source);
    }

    #[test]
    fn assigned_value_is_stored(name in identifier_strategy(), sample in arithmetic_strategy()) {
        let mut env = Environment::new();
        let result = evaluate(&format!("{name} = {}", sample.source), &mut env).unwrap();
        prop_assert_eq!(result, sample.value);
        prop_assert_eq!(env.variable(&name), Some(sample.value));
    }

    #[test]
    fn for_runs_the_body_count_times(count in 0.0_f64..50.0) {
        let mut env = Environment::new();
        env.set_variable("runs", 0.0);

        let result = evaluate(&format!("for({count}, runs = runs + 1)"), &mut env).unwrap();

        prop_assert_eq!(result, 1.0);
        prop_assert_eq!(env.variable("runs"), Some(count.trunc()));
    }

    #[test]
    fn rendering_reparses_to_the_same_formula(source in formula_strategy()) {
        let formula = Formula::parse(&source).unwrap();
        let reparsed = Formula::parse(&formula.to_string()).unwrap();
        prop_assert_eq!(reparsed, formula);
    }
}
