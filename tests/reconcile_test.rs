//! Reconciliation tests against the sample ledgers and edge cases.

use coding_exercises::{read_transactions, MatchStatus, Reconciled, Reconciler};
use std::fs::File;
use std::io::Cursor;

fn load(filename: &str) -> Vec<coding_exercises::Transaction> {
    let file = File::open(format!("tests/data/{}", filename)).unwrap();
    read_transactions(file).unwrap()
}

/// Renders reconciled entries the way the ledgers are written.
fn rows(reconciled: &[Reconciled]) -> Vec<String> {
    reconciled
        .iter()
        .map(|r| format!("{},{}", r.transaction.fields().join(","), r.status))
        .collect()
}

fn run_csv(left: &str, right: &str) -> (Vec<String>, Vec<String>) {
    let left = read_transactions(Cursor::new(left)).unwrap();
    let right = read_transactions(Cursor::new(right)).unwrap();
    let (left, right) = Reconciler::new().reconcile(left, right);
    (rows(&left), rows(&right))
}

#[test]
fn test_reconcile_accounts_success() {
    let (out1, out2) =
        Reconciler::new().reconcile(load("transactions1.csv"), load("transactions2.csv"));

    assert_eq!(
        rows(&out1),
        vec![
            "2020-12-02,Tecnologia,16.00,Bitbucket,MISSING",
            "2020-12-03,Tecnologia,16.00,Bitbucket,FOUND",
            "2020-12-04,Jurídico,60.00,LinkSquares,FOUND",
            "2020-12-04,Tecnologia,16.00,Bitbucket,MISSING",
            "2020-12-05,Tecnologia,50.00,AWS,MISSING",
        ]
    );
    assert_eq!(
        rows(&out2),
        vec![
            "2020-12-04,Jurídico,60.00,LinkSquares,FOUND",
            "2020-12-04,Jurídico,60.00,LinkSquares,MISSING",
            "2020-12-04,Tecnologia,16.00,Bitbucket,FOUND",
            "2020-12-05,Tecnologia,49.99,AWS,MISSING",
        ]
    );
}

#[test]
fn test_found_counts_match_on_both_sides() {
    let (out1, out2) =
        Reconciler::new().reconcile(load("transactions1.csv"), load("transactions2.csv"));

    let found = |entries: &[Reconciled]| {
        entries
            .iter()
            .filter(|r| r.status == MatchStatus::Found)
            .count()
    };
    assert_eq!(found(&out1), found(&out2));
}

// ==================== EMPTY LEDGERS ====================

#[test]
fn test_both_empty() {
    let (left, right) = run_csv("", "");
    assert!(left.is_empty());
    assert!(right.is_empty());
}

#[test]
fn test_empty_right_marks_everything_missing() {
    let (left, right) = run_csv("2020-12-02,Tecnologia,16.00,Bitbucket\n", "");
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,MISSING"]);
    assert!(right.is_empty());
}

// ==================== FIELD MATCHING ====================

#[test]
fn test_amount_scale_does_not_matter() {
    let (left, right) = run_csv(
        "2020-12-02,Tecnologia,16,Bitbucket\n",
        "2020-12-02,Tecnologia,16.00,Bitbucket\n",
    );
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,FOUND"]);
    assert_eq!(right, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,FOUND"]);
}

#[test]
fn test_extra_decimal_places_do_not_match() {
    let (left, right) = run_csv(
        "2020-12-02,Tecnologia,16.004,Bitbucket\n",
        "2020-12-02,Tecnologia,16.00,Bitbucket\n",
    );
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.004,Bitbucket,MISSING"]);
    assert_eq!(right, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,MISSING"]);
}

#[test]
fn test_department_must_match_exactly() {
    let (left, _) = run_csv(
        "2020-12-02,Tecnologia,16.00,Bitbucket\n",
        "2020-12-02,tecnologia,16.00,Bitbucket\n",
    );
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,MISSING"]);
}

#[test]
fn test_beneficiary_must_match_exactly() {
    let (left, _) = run_csv(
        "2020-12-02,Tecnologia,16.00,Bitbucket\n",
        "2020-12-02,Tecnologia,16.00,GitHub\n",
    );
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,MISSING"]);
}

// ==================== DATE MARGIN ====================

#[test]
fn test_two_days_apart_is_missing() {
    let (left, right) = run_csv(
        "2020-12-02,Tecnologia,16.00,Bitbucket\n",
        "2020-12-04,Tecnologia,16.00,Bitbucket\n",
    );
    assert_eq!(left, vec!["2020-12-02,Tecnologia,16.00,Bitbucket,MISSING"]);
    assert_eq!(right, vec!["2020-12-04,Tecnologia,16.00,Bitbucket,MISSING"]);
}

#[test]
fn test_earliest_candidate_wins() {
    let (_, right) = run_csv(
        "2020-12-03,Tecnologia,16.00,Bitbucket\n",
        "2020-12-04,Tecnologia,16.00,Bitbucket\n2020-12-02,Tecnologia,16.00,Bitbucket\n",
    );
    assert_eq!(
        right,
        vec![
            "2020-12-02,Tecnologia,16.00,Bitbucket,FOUND",
            "2020-12-04,Tecnologia,16.00,Bitbucket,MISSING",
        ]
    );
}

#[test]
fn test_wider_margin() {
    let left = read_transactions(Cursor::new("2020-12-01,Tecnologia,16.00,Bitbucket\n")).unwrap();
    let right = read_transactions(Cursor::new("2020-12-04,Tecnologia,16.00,Bitbucket\n")).unwrap();

    let (left, _) = Reconciler::with_margin(3).unwrap().reconcile(left, right);
    assert_eq!(left[0].status, MatchStatus::Found);
}

#[test]
fn test_unbounded_margin_matches_any_date() {
    let left = read_transactions(Cursor::new("1990-01-01,Tecnologia,16.00,Bitbucket\n")).unwrap();
    let right = read_transactions(Cursor::new("2020-12-04,Tecnologia,16.00,Bitbucket\n")).unwrap();

    let (left, right) = Reconciler::with_margin(100_000_000).unwrap().reconcile(left, right);
    assert_eq!(left[0].status, MatchStatus::Found);
    assert_eq!(right[0].status, MatchStatus::Found);
}
