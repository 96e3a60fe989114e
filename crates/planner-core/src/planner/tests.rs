//! Tests for the planner.

use super::*;
use crate::filter::Outcome;

fn games() -> Vec<BoardGame> {
    vec![
        BoardGame::new("17 days", 6, 1, 8, 70, 70, 9.0, 600, 9.0, 2005),
        BoardGame::new("Chess", 7, 2, 2, 10, 20, 10.0, 700, 10.0, 2006),
        BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000),
        BoardGame::new("Go Fish", 2, 2, 10, 20, 120, 3.0, 200, 6.5, 2001),
        BoardGame::new("golang", 4, 2, 7, 50, 55, 7.0, 400, 9.5, 2003),
        BoardGame::new("GoRami", 3, 6, 6, 40, 42, 5.0, 300, 8.5, 2002),
        BoardGame::new("Monopoly", 8, 6, 10, 20, 1000, 1.0, 800, 5.0, 2007),
        BoardGame::new("Tucano", 5, 10, 20, 60, 90, 6.0, 500, 8.0, 2004),
    ]
}

fn planner() -> Planner {
    Planner::new(games())
}

fn names(view: &[&BoardGame]) -> Vec<String> {
    view.iter().map(|g| g.name().to_string()).collect()
}

// ==================== Single Filter Tests ====================

#[test]
fn test_filter_name_equals() {
    let mut planner = planner();
    assert_eq!(names(&planner.filter("name == Go")), vec!["Go"]);
}

#[test]
fn test_empty_filter_returns_all_sorted_by_name() {
    let mut planner = planner();
    assert_eq!(
        names(&planner.filter("")),
        vec!["17 days", "Chess", "Go", "Go Fish", "golang", "GoRami", "Monopoly", "Tucano"]
    );
}

#[test]
fn test_blank_filter_is_empty() {
    let mut planner = planner();
    assert_eq!(planner.filter("   ").len(), 8);
    assert_eq!(planner.filters().len(), 0);
}

#[test]
fn test_filter_min_players() {
    let mut planner = planner();
    assert_eq!(
        names(&planner.filter("minPlayers >= 6")),
        vec!["GoRami", "Monopoly", "Tucano"]
    );
}

#[test]
fn test_filter_rating() {
    let mut planner = planner();
    let view = planner.filter("rating >= 9.0");
    assert_eq!(names(&view), vec!["17 days", "Chess", "golang"]);
}

#[test]
fn test_filter_with_custom_sorting() {
    let mut planner = planner();
    let view = planner.filter_with("minPlayers <= 2", SortOrder::descending(GameData::Year));
    assert_eq!(
        names(&view),
        vec!["Chess", "17 days", "golang", "Go Fish", "Go"]
    );
}

#[test]
fn test_filter_sorted_defaults_to_ascending() {
    let mut planner = planner();
    let view = planner.filter_sorted("", GameData::Rank);
    assert_eq!(
        names(&view),
        vec!["Go", "Go Fish", "GoRami", "golang", "Tucano", "17 days", "Chess", "Monopoly"]
    );
}

#[test]
fn test_multiple_clauses_in_one_call() {
    let mut planner = planner();
    assert_eq!(
        names(&planner.filter("name ~= Go, maxPlayers <= 7")),
        vec!["Go", "golang", "GoRami"]
    );
}

// ==================== Progressive Filter Tests ====================

#[test]
fn test_filters_accumulate_across_calls() {
    let mut planner = planner();
    assert_eq!(planner.filter("name~=go").len(), 4);
    assert_eq!(
        names(&planner.filter("maxPlayers<=7")),
        vec!["Go", "golang", "GoRami"]
    );
    assert_eq!(planner.filters().len(), 2);
}

#[test]
fn test_empty_filter_resurfaces_current_view() {
    let mut planner = planner();
    planner.filter("name~=go, maxPlayers<=7");
    assert_eq!(names(&planner.filter("")), vec!["Go", "golang", "GoRami"]);
    assert_eq!(names(&planner.filter("")), vec!["Go", "golang", "GoRami"]);
}

#[test]
fn test_empty_filter_can_resort_narrowed_view() {
    let mut planner = planner();
    planner.filter("minPlayers<=2");
    let view = planner.filter_with("", SortOrder::descending(GameData::Rating));
    assert_eq!(
        names(&view),
        vec!["Chess", "golang", "17 days", "Go", "Go Fish"]
    );
}

#[test]
fn test_progressive_filtering_narrows_monotonically() {
    let expressions = [
        "name~=go",
        "maxPlayers<=7",
        "rating>5",
        "year!=2003",
        "bogus",
        "rank~=1",
    ];
    let mut planner = planner();
    let mut previous = planner.filter("").len();
    for expression in expressions {
        let len = planner.filter(expression).len();
        assert!(len <= previous, "{expression}: {len} > {previous}");
        previous = len;
    }
}

#[test]
fn test_reset_restores_full_set() {
    let mut planner = planner();
    planner.filter("name~=go");
    planner.filter("rating>9");
    planner.reset();
    assert!(planner.filters().is_empty());
    assert_eq!(names(&planner.filter("")), names(&Planner::new(games()).filter("")));
}

#[test]
fn test_view_depends_only_on_clause_history() {
    let mut one_call = planner();
    let mut two_calls = planner();
    let a = names(&one_call.filter_with("name~=go, maxPlayers<=7", SortOrder::descending(GameData::Year)));
    two_calls.filter_sorted("name~=go", GameData::Rating);
    let b = names(&two_calls.filter_with("maxPlayers<=7", SortOrder::descending(GameData::Year)));
    assert_eq!(a, b);
}

// ==================== Dropped Clause Tests ====================

#[test]
fn test_bad_clauses_are_dropped() {
    let mut planner = planner();
    let outcome = planner.filter_report("bogus==1, rating>9, name", SortOrder::default());
    assert_eq!(names(&outcome.games), vec!["Chess", "golang"]);
    assert_eq!(outcome.rejected.len(), 2);
    assert!(matches!(outcome.rejected[0], FilterError::UnknownField { .. }));
    assert!(matches!(outcome.rejected[1], FilterError::MissingOperator { .. }));
    assert_eq!(planner.filters().len(), 1);
}

#[test]
fn test_all_bad_clauses_leave_view_unchanged() {
    let mut planner = planner();
    planner.filter("name~=go");
    assert_eq!(planner.filter("nonsense, ,==").len(), 4);
}

#[test]
fn test_unparsable_literal_rejects_everything_until_reset() {
    let mut planner = planner();
    assert!(planner.filter("rating>=high").is_empty());
    assert_eq!(planner.filters()[0].predicate().outcome(), Outcome::RejectAll);
    assert!(planner.filter("").is_empty());
    planner.reset();
    assert_eq!(planner.filter("").len(), 8);
}

#[test]
fn test_contains_on_numeric_column_keeps_everything() {
    let mut planner = planner();
    assert_eq!(planner.filter("year~=2000").len(), 8);
    assert_eq!(planner.filters()[0].predicate().outcome(), Outcome::AcceptAll);
}

// ==================== State Accessor Tests ====================

#[test]
fn test_active_clauses_are_canonical() {
    let mut planner = planner();
    planner.filter("NAME ~= go , MinPlayers>=2");
    let clauses: Vec<String> = planner.active_clauses().map(ToString::to_string).collect();
    assert_eq!(clauses, vec!["name~=go", "minPlayers>=2"]);
}

#[test]
fn test_base_set_is_never_modified() {
    let mut planner = planner();
    planner.filter_with("rating>8", SortOrder::descending(GameData::Rating));
    planner.reset();
    planner.filter("name==Chess");
    assert_eq!(planner.base_len(), 8);
    assert_eq!(planner.games(), games().as_slice());
}

#[test]
fn test_empty_base_set() {
    let mut planner = Planner::new(Vec::new());
    assert!(planner.filter("rating>1").is_empty());
    assert!(planner.filter("").is_empty());
}

#[test]
fn test_add_filters_without_building_a_view() {
    let mut planner = planner();
    let rejected = planner.add_filters("name~=go, colour==red");
    assert_eq!(rejected.len(), 1);
    assert_eq!(planner.filters().len(), 1);
    assert_eq!(names(&planner.current(SortOrder::default())), names(&planner.clone().filter("")));
}
