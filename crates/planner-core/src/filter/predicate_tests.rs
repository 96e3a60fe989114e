//! Tests for predicate building and matching.

use super::*;
use crate::model::{BoardGame, GameData};

fn game(name: &str, rating: f64) -> BoardGame {
    BoardGame::new(name, 1, 2, 4, 30, 60, 2.5, 100, rating, 2000)
}

fn predicate(input: &str) -> Predicate {
    Predicate::build(&ClauseParser::parse(input).unwrap())
}

fn matching_names<'a>(predicate: &Predicate, games: &'a [BoardGame]) -> Vec<&'a str> {
    games
        .iter()
        .filter(|g| predicate.matches(g))
        .map(BoardGame::name)
        .collect()
}

// ==================== Text Predicate Tests ====================

#[test]
fn test_name_equals_is_case_insensitive() {
    let p = predicate("name==go");
    assert!(p.matches(&game("Go", 8.0)));
    assert!(p.matches(&game("GO", 8.0)));
    assert!(!p.matches(&game("Go Fish", 8.0)));
}

#[test]
fn test_name_not_equals() {
    let p = predicate("name!=chess");
    assert!(!p.matches(&game("Chess", 8.0)));
    assert!(p.matches(&game("Go", 8.0)));
}

#[test]
fn test_name_contains() {
    let games = [
        game("Go", 8.0),
        game("golang", 7.0),
        game("GoRami", 5.0),
        game("Chess", 10.0),
    ];
    let p = predicate("name~=go");
    assert_eq!(matching_names(&p, &games), vec!["Go", "golang", "GoRami"]);
}

#[test]
fn test_name_ordering_is_lexicographic_on_lowercase() {
    let games = [game("apple", 1.0), game("Banana", 1.0), game("cherry", 1.0)];
    assert_eq!(
        matching_names(&predicate("name>b"), &games),
        vec!["Banana", "cherry"]
    );
    assert_eq!(
        matching_names(&predicate("name>=banana"), &games),
        vec!["Banana", "cherry"]
    );
    assert_eq!(matching_names(&predicate("name<banana"), &games), vec!["apple"]);
    assert_eq!(
        matching_names(&predicate("name<=BANANA"), &games),
        vec!["apple", "Banana"]
    );
}

#[test]
fn test_text_predicate_stores_lowercase_needle() {
    assert_eq!(
        predicate("name~=GoRami"),
        Predicate::Text {
            field: GameData::Name,
            op: Operator::Contains,
            needle: "gorami".to_string(),
        }
    );
}

// ==================== Numeric Predicate Tests ====================

#[test]
fn test_rating_greater_or_equal() {
    let games = [game("A", 9.0), game("B", 8.0), game("C", 10.0)];
    assert_eq!(matching_names(&predicate("rating>=9.0"), &games), vec!["A", "C"]);
}

#[test]
fn test_numeric_equality_is_exact() {
    let p = predicate("rating==8.5");
    assert!(p.matches(&game("A", 8.5)));
    assert!(!p.matches(&game("B", 8.500001)));
}

#[test]
fn test_integer_column_accepts_decimal_literal() {
    let g = BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000);
    assert!(predicate("minPlayers>1.5").matches(&g));
    assert!(predicate("minPlayers==2").matches(&g));
    assert!(predicate("minPlayers==2.0").matches(&g));
    assert!(!predicate("minPlayers<2").matches(&g));
}

#[test]
fn test_every_numeric_column_reads_its_own_value() {
    let g = BoardGame::new("Go", 1, 2, 5, 30, 45, 8.0, 100, 7.5, 2000);
    for (input, expected) in [
        ("rating==7.5", true),
        ("difficulty==8", true),
        ("rank==100", true),
        ("minPlayers==2", true),
        ("maxPlayers==5", true),
        ("minTime==30", true),
        ("maxTime==45", true),
        ("year==2000", true),
        ("year==2001", false),
    ] {
        assert_eq!(predicate(input).matches(&g), expected, "{input}");
    }
}

#[test]
fn test_not_equals_numeric() {
    let p = predicate("rating!=8");
    assert!(!p.matches(&game("A", 8.0)));
    assert!(p.matches(&game("B", 7.0)));
}

#[test]
fn test_nan_literal_only_satisfies_not_equals() {
    let g = game("A", 8.0);
    assert!(!predicate("rating==NaN").matches(&g));
    assert!(!predicate("rating>=NaN").matches(&g));
    assert!(predicate("rating!=NaN").matches(&g));
}

// ==================== Fallback Tests ====================

#[test]
fn test_unparsable_literal_rejects_all() {
    let p = predicate("rating>=high");
    assert_eq!(p.outcome(), Outcome::RejectAll);
    assert_eq!(
        p,
        Predicate::RejectAll {
            field: GameData::Rating,
            literal: "high".to_string(),
        }
    );
    assert!(!p.matches(&game("A", 10.0)));
}

#[test]
fn test_contains_on_numeric_column_accepts_all() {
    let p = predicate("year~=20");
    assert_eq!(p.outcome(), Outcome::AcceptAll);
    assert_eq!(
        p,
        Predicate::Unsupported {
            field: GameData::Year,
            op: Operator::Contains,
        }
    );
    assert!(p.matches(&game("A", 1.0)));
}

#[test]
fn test_contains_on_numeric_with_bad_literal_still_rejects() {
    let p = predicate("year~=twenty");
    assert_eq!(p.outcome(), Outcome::RejectAll);
}

#[test]
fn test_regular_predicates_are_filtering() {
    assert_eq!(predicate("name==Go").outcome(), Outcome::Filtering);
    assert_eq!(predicate("rank<10").outcome(), Outcome::Filtering);
}

#[test]
fn test_field_accessor() {
    assert_eq!(predicate("maxTime<60").field(), GameData::MaxTime);
    assert_eq!(predicate("rank~=1").field(), GameData::Rank);
    assert_eq!(predicate("year>abc").field(), GameData::Year);
}
