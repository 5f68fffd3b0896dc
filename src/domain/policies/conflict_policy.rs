//! Conflict Policy
//!
//! Decides which of two mutually exclusive modules is dropped.

use std::cmp::Ordering;

/// A module taking part in a conflict comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contender<'a> {
    pub id: &'a str,
    pub priority: u16,
}

/// Which side of a conflicting pair loses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loser {
    First,
    Second,
}

/// Lower priority loses. On a tie the identifier that sorts later loses, so
/// `a <= b` keeps `a`.
pub fn conflict_loser(a: Contender<'_>, b: Contender<'_>) -> Loser {
    match a.priority.cmp(&b.priority) {
        Ordering::Greater => Loser::Second,
        Ordering::Less => Loser::First,
        Ordering::Equal => {
            if a.id <= b.id {
                Loser::Second
            } else {
                Loser::First
            }
        }
    }
}
