//! Comparison operators and their textual tokens.

use std::cmp::Ordering;
use std::fmt;

/// A comparison operator in a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `~=` (substring containment, text columns only)
    Contains,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
}

/// How an operator decides, given the ordering of the column value against
/// the literal. `None` in the accepted set stands for "unordered" (NaN).
struct Rule {
    operator: Operator,
    token: &'static str,
    accepts: &'static [Option<Ordering>],
}

/// Operators in detection order: two-character tokens come before their
/// one-character prefixes.
const RULES: [Rule; 7] = [
    Rule {
        operator: Operator::Equals,
        token: "==",
        accepts: &[Some(Ordering::Equal)],
    },
    Rule {
        operator: Operator::NotEquals,
        token: "!=",
        accepts: &[Some(Ordering::Less), Some(Ordering::Greater), None],
    },
    Rule {
        operator: Operator::Contains,
        token: "~=",
        accepts: &[],
    },
    Rule {
        operator: Operator::GreaterOrEqual,
        token: ">=",
        accepts: &[Some(Ordering::Greater), Some(Ordering::Equal)],
    },
    Rule {
        operator: Operator::LessOrEqual,
        token: "<=",
        accepts: &[Some(Ordering::Less), Some(Ordering::Equal)],
    },
    Rule {
        operator: Operator::GreaterThan,
        token: ">",
        accepts: &[Some(Ordering::Greater)],
    },
    Rule {
        operator: Operator::LessThan,
        token: "<",
        accepts: &[Some(Ordering::Less)],
    },
];

impl Operator {
    /// All operators, in the order they are tried when scanning a clause.
    pub const DETECTION_ORDER: [Operator; 7] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::Contains,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::GreaterThan,
        Operator::LessThan,
    ];

    fn rule(self) -> &'static Rule {
        let index = match self {
            Operator::Equals => 0,
            Operator::NotEquals => 1,
            Operator::Contains => 2,
            Operator::GreaterOrEqual => 3,
            Operator::LessOrEqual => 4,
            Operator::GreaterThan => 5,
            Operator::LessThan => 6,
        };
        &RULES[index]
    }

    /// The textual token for this operator, e.g. `>=`.
    pub fn token(self) -> &'static str {
        self.rule().token
    }

    /// Finds the operator used in a clause.
    ///
    /// Tokens are tried in [`Operator::DETECTION_ORDER`] and the first one
    /// contained anywhere in the clause wins, so `a>=1` is `>=`, not `>`.
    pub fn detect(clause: &str) -> Option<Operator> {
        RULES
            .iter()
            .find(|rule| clause.contains(rule.token))
            .map(|rule| rule.operator)
    }

    /// Returns true for operators decided by an ordering (everything but `~=`).
    pub fn is_ordering(self) -> bool {
        !self.rule().accepts.is_empty()
    }

    /// Applies the operator to the result of comparing a value with the literal.
    ///
    /// `None` means the two were unordered (a NaN was involved); only `!=`
    /// accepts that, as IEEE-754 comparison does.
    pub fn accepts(self, ordering: Option<Ordering>) -> bool {
        self.rule().accepts.contains(&ordering)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
