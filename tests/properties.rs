//! Property-based tests for the evaluator and the scientific notation helpers.

use exprcalc::{CalcError, ErrorKind, evaluate, scientific};
use proptest::prelude::*;

/// A generated expression, rendered with explicit parentheses.
#[derive(Debug, Clone)]
enum Tree {
    Num(u32),
    Neg(Box<Tree>),
    Bin(Box<Tree>, char, Box<Tree>),
}

impl Tree {
    fn render(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Neg(inner) => format!("-({})", inner.render()),
            Self::Bin(left, op, right) => format!("({}{op}{})", left.render(), right.render()),
        }
    }

    /// Reference value; `None` when some division has a zero divisor.
    fn value(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(f64::from(*n)),
            Self::Neg(inner) => inner.value().map(|v| -v),
            Self::Bin(left, op, right) => {
                let (left, right) = (left.value()?, right.value()?);
                match op {
                    '+' => Some(left + right),
                    '-' => Some(left - right),
                    '*' => Some(left * right),
                    _ if right == 0.0 => None,
                    _ => Some(left / right),
                }
            },
        }
    }
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = (0u32..50).prop_map(Tree::Num);
    leaf.prop_recursive(5, 32, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|t| Tree::Neg(Box::new(t))),
                (inner.clone(), operator_strategy(), inner)
                    .prop_map(|(l, op, r)| Tree::Bin(Box::new(l), op, Box::new(r))),
            ]
        })
}

/// Evaluates `first op n op n ...` with `*` and `/` binding tighter than
/// `+` and `-`, everything left to right.
fn flat_reference(first: u32, rest: &[(char, u32)]) -> Option<f64> {
    let mut terms = vec![('+', f64::from(first))];

    for &(op, n) in rest {
        let n = f64::from(n);
        match (op, terms.last_mut()) {
            ('/', _) if n == 0.0 => return None,
            ('*', Some((_, term))) => *term *= n,
            ('/', Some((_, term))) => *term /= n,
            _ => terms.push((op, n)),
        }
    }

    let (_, mut acc) = terms[0];
    for &(op, term) in &terms[1..] {
        acc = if op == '+' { acc + term } else { acc - term };
    }
    Some(acc)
}

fn assert_matches_reference(source: &str, expected: Option<f64>) -> Result<(), TestCaseError> {
    match (evaluate(source), expected) {
        (Ok(actual), Some(expected)) => prop_assert_eq!(actual, expected, "{}", source),
        (Err(CalcError::DivisionByZero), None) => {},
        (actual, expected) => {
            prop_assert!(false, "{}: got {:?}, expected {:?}", source, actual, expected);
        },
    }
    Ok(())
}

proptest! {
    /// Operator precedence and left-to-right folding over flat sequences.
    #[test]
    fn prop_flat_sequences_follow_precedence(
        first in 0u32..20,
        rest in prop::collection::vec((operator_strategy(), 0u32..20), 0..12),
    ) {
        let mut source = first.to_string();
        for (op, n) in &rest {
            source.push(*op);
            source.push_str(&n.to_string());
        }
        assert_matches_reference(&source, flat_reference(first, &rest))?;
    }

    /// Fully parenthesised trees evaluate exactly like the reference.
    #[test]
    fn prop_parenthesised_trees(tree in tree_strategy()) {
        assert_matches_reference(&tree.render(), tree.value())?;
    }

    /// Whitespace anywhere in the input changes nothing.
    #[test]
    fn prop_whitespace_is_ignored(
        tree in tree_strategy(),
        gaps in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let source = tree.render();
        let mut spaced: Vec<char> = source.chars().collect();
        for gap in gaps {
            spaced.insert(gap.index(spaced.len() + 1), ' ');
        }
        let spaced: String = spaced.into_iter().collect();

        prop_assert_eq!(evaluate(&spaced), evaluate(&source));
    }

    /// An extra parenthesis on either side is always reported as mismatched.
    #[test]
    fn prop_unbalanced_parentheses(tree in tree_strategy(), leading in any::<bool>()) {
        let source = if leading {
            format!("){}", tree.render())
        } else {
            format!("{}(", tree.render())
        };
        let kind = evaluate(&source).map_err(|e| e.kind());
        prop_assert_eq!(kind, Err(ErrorKind::MismatchedParentheses));
    }

    /// A foreign character is reported with its position, before any other
    /// problem with the input.
    #[test]
    fn prop_invalid_character_is_located(
        tree in tree_strategy(),
        character in prop::sample::select(vec!['#', '%', '&', '=', '?', '!', '@', '~', 'y', 'z', 'Q']),
        at in any::<prop::sample::Index>(),
    ) {
        let mut source = tree.render();
        let position = at.index(source.len() + 1);
        source.insert(position, character);

        prop_assert_eq!(evaluate(&source),
                        Err(CalcError::InvalidCharacter { character, position }));
    }

    /// Formatting with 16 fractional digits keeps every bit of the value.
    #[test]
    fn prop_scientific_round_trip(value in prop::num::f64::NORMAL) {
        let text = scientific::format(value, 16);
        prop_assert_eq!(scientific::parse(&text), Ok(value));
    }

    /// The mantissa of any formatted finite non-zero value lies in [1, 10).
    #[test]
    fn prop_scientific_mantissa_is_normalised(value in prop::num::f64::NORMAL, precision in 0usize..10) {
        let text = scientific::format(value, precision);
        let (mantissa, _) = text.split_once('e').unwrap();
        let mantissa: f64 = mantissa.parse().unwrap();
        prop_assert!((1.0..10.0).contains(&mantissa.abs()), "{}", text);
    }
}
