use std::{collections::HashSet, fmt};

use crate::{Board, Piece, PieceBag, PieceKind};

/// Outcome of one diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestCheck {
    pub name: &'static str,
    pub passed: bool,
}

impl fmt::Display for SelfTestCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{mark}] {}", self.name)
    }
}

/// Results of [`run_self_test`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    checks: Vec<SelfTestCheck>,
}

impl SelfTestReport {
    #[must_use]
    pub fn checks(&self) -> &[SelfTestCheck] {
        &self.checks
    }

    /// Returns whether every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|check| !check.passed).count()
    }

    fn check(&mut self, name: &'static str, passed: bool) {
        if !passed {
            log::warn!("self-test check failed: {name}");
        }
        self.checks.push(SelfTestCheck { name, passed });
    }
}

/// Exercises the collision and placement rules on scratch boards.
///
/// Only fresh boards, pieces and bags are used, so running this never disturbs a game
/// in progress.
///
/// # Example
///
/// ```
/// let report = ohana_engine::run_self_test();
/// assert!(report.passed());
/// ```
#[must_use]
pub fn run_self_test() -> SelfTestReport {
    let mut report = SelfTestReport::default();
    let empty = Board::EMPTY;

    report.check(
        "board is 20 rows of 10 columns",
        empty.rows().count() == 20 && empty.rows().all(|row| row.len() == 10),
    );
    report.check(
        "O at column 4 above the top does not collide",
        !empty.collides(&Piece::at(PieceKind::O, 4, -1), 0, 0, None),
    );
    report.check(
        "I at column -1 collides with the left wall",
        empty.collides(&Piece::at(PieceKind::I, -1, 0), 0, 0, None),
    );
    report.check(
        "O on the floor collides one row lower",
        empty.collides(&Piece::at(PieceKind::O, 4, 18), 0, 1, None),
    );

    let mut board = Board::EMPTY;
    board.fill_row(19, PieceKind::I);
    let cleared = board.clear_lines();
    report.check(
        "single full row clears and leaves the top row empty",
        cleared == 1 && board.rows().next().is_some_and(|row| row.iter().all(Option::is_none)),
    );

    let mut board = Board::EMPTY;
    board.fill_row(18, PieceKind::J);
    board.fill_row(19, PieceKind::L);
    report.check("two full rows clear together", board.clear_lines() == 2);

    report.check(
        "rotation preserves the cell count of every kind",
        PieceKind::ALL.into_iter().all(|kind| {
            let shape = kind.shape();
            std::iter::successors(Some(shape), |s| Some(s.rotated()))
                .take(4)
                .all(|s| s.count() == shape.count())
        }),
    );
    report.check(
        "four rotations return the canonical orientation",
        PieceKind::ALL.into_iter().all(|kind| {
            let shape = kind.shape();
            shape.rotated().rotated().rotated().rotated() == shape
        }),
    );

    let mut bag = PieceBag::new();
    let kinds: HashSet<_> = (0..PieceKind::LEN).map(|_| bag.next_kind()).collect();
    report.check(
        "seven draws from a fresh bag contain every kind",
        kinds.len() == PieceKind::LEN,
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        let report = run_self_test();
        for check in report.checks() {
            assert!(check.passed, "{check}");
        }
        assert_eq!(report.checks().len(), 9);
        assert!(report.passed());
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_report_fails_with_one_failed_check() {
        let mut report = SelfTestReport::default();
        report.check("ok", true);
        report.check("broken", false);
        assert!(!report.passed());
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.checks()[1].to_string(), "[FAIL] broken");
    }
}
