//! Per-owner like totals and reconciliation of two reports.
//!
//! The database crate computes the same ranking two ways. This module holds
//! the common row shape both reduce to and [`reconcile`], which lists every
//! way two rankings disagree.

use std::collections::HashMap;

use serde::Serialize;

/// One ranked entry: an owner and the sum of likes over their published videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerLikes {
    pub username: String,
    pub likes_sum: i64,
}

/// A single disagreement between two rankings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// Present only in the right-hand report.
    MissingFromLeft { username: String },
    /// Present only in the left-hand report.
    MissingFromRight { username: String },
    /// Present in both with different sums.
    SumMismatch {
        username: String,
        left: i64,
        right: i64,
    },
    /// Same members and sums, but ranked differently at `position`.
    OrderMismatch {
        position: usize,
        left: String,
        right: String,
    },
}

/// Compare two rankings. An empty result means they agree on members, sums
/// and order.
///
/// Order is only compared once membership and sums match; otherwise every
/// position after the first difference would be reported as noise.
pub fn reconcile(left: &[OwnerLikes], right: &[OwnerLikes]) -> Vec<Discrepancy> {
    let left_sums: HashMap<&str, i64> = left
        .iter()
        .map(|row| (row.username.as_str(), row.likes_sum))
        .collect();
    let right_sums: HashMap<&str, i64> = right
        .iter()
        .map(|row| (row.username.as_str(), row.likes_sum))
        .collect();

    let mut discrepancies = Vec::new();

    for row in left {
        match right_sums.get(row.username.as_str()) {
            None => discrepancies.push(Discrepancy::MissingFromRight {
                username: row.username.clone(),
            }),
            Some(&sum) if sum != row.likes_sum => discrepancies.push(Discrepancy::SumMismatch {
                username: row.username.clone(),
                left: row.likes_sum,
                right: sum,
            }),
            Some(_) => {}
        }
    }
    for row in right {
        if !left_sums.contains_key(row.username.as_str()) {
            discrepancies.push(Discrepancy::MissingFromLeft {
                username: row.username.clone(),
            });
        }
    }

    if discrepancies.is_empty() {
        for (position, (l, r)) in left.iter().zip(right).enumerate() {
            if l.username != r.username {
                discrepancies.push(Discrepancy::OrderMismatch {
                    position,
                    left: l.username.clone(),
                    right: r.username.clone(),
                });
            }
        }
    }

    discrepancies
}

/// Whether a ranking is ordered by `likes_sum` descending.
pub fn is_ranked(report: &[OwnerLikes]) -> bool {
    report.windows(2).all(|w| w[0].likes_sum >= w[1].likes_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, likes_sum: i64) -> OwnerLikes {
        OwnerLikes {
            username: username.to_string(),
            likes_sum,
        }
    }

    #[test]
    fn identical_reports_agree() {
        let a = vec![row("alice", 9), row("bob", 2)];
        assert!(reconcile(&a, &a.clone()).is_empty());
    }

    #[test]
    fn empty_reports_agree() {
        assert!(reconcile(&[], &[]).is_empty());
    }

    #[test]
    fn detects_missing_members() {
        let left = vec![row("alice", 9), row("bob", 2)];
        let right = vec![row("alice", 9), row("carol", 1)];
        let d = reconcile(&left, &right);
        assert_eq!(
            d,
            vec![
                Discrepancy::MissingFromRight {
                    username: "bob".into()
                },
                Discrepancy::MissingFromLeft {
                    username: "carol".into()
                },
            ]
        );
    }

    #[test]
    fn detects_sum_mismatch() {
        let left = vec![row("alice", 9)];
        let right = vec![row("alice", 7)];
        assert_eq!(
            reconcile(&left, &right),
            vec![Discrepancy::SumMismatch {
                username: "alice".into(),
                left: 9,
                right: 7,
            }]
        );
    }

    #[test]
    fn detects_order_mismatch_only_when_sets_match() {
        let left = vec![row("alice", 5), row("bob", 5)];
        let right = vec![row("bob", 5), row("alice", 5)];
        let d = reconcile(&left, &right);
        assert_eq!(d.len(), 2);
        assert_eq!(
            d[0],
            Discrepancy::OrderMismatch {
                position: 0,
                left: "alice".into(),
                right: "bob".into(),
            }
        );
    }

    #[test]
    fn ranking_check() {
        assert!(is_ranked(&[row("a", 3), row("b", 3), row("c", 0)]));
        assert!(!is_ranked(&[row("a", 1), row("b", 2)]));
        assert!(is_ranked(&[]));
    }
}
