//! Dependency-aware evaluation of a whole grid.
//!
//! A cell's expression may reference other cells, so resolving one cell can
//! pull in a whole dependency chain. Chains can be as long as the grid, so
//! the traversal is a depth-first search driven by an explicit stack of
//! pending cells instead of native recursion.
//!
//! When a scan meets a reference to an unvisited cell, the scanning cell is
//! paused: the dependency is pushed on top of the stack and the scanning
//! cell is re-scanned from its first token once the dependency resolves. By
//! then every earlier reference is resolved and cached in the grid, so the
//! re-scan is deterministic and nothing needs to be carried across a pause.

use log::{debug, info, trace};

use super::cell_ref::CellRef;
use super::error::EvalError;
use super::format::{format_value, parse_value};
use super::grid::Grid;
use super::rpn::{OperandStack, StackFault, Token};
use super::visit::{VisitMap, VisitState};

/// Counters for one or more resolutions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ResolveStats {
    /// Cells whose value was committed to the grid.
    pub committed: usize,
    /// Times a scan stopped to resolve a dependency first.
    pub pauses: usize,
}

impl std::ops::AddAssign for ResolveStats {
    fn add_assign(&mut self, other: ResolveStats) {
        self.committed += other.committed;
        self.pauses += other.pauses;
    }
}

/// Outcome of scanning one cell's tokens.
enum Scan {
    Value(f64),
    Pause(CellRef),
}

/// Evaluate `start` and every cell it transitively depends on.
///
/// Resolved values are written back into `grid` as formatted text and
/// their cells marked [`VisitState::Resolved`] in `visits`. Resolving a
/// cell that is already resolved does nothing. A start cell outside the
/// grid is an [`EvalError::OutsideGrid`].
pub fn resolve(
    start: CellRef,
    grid: &mut Grid,
    visits: &mut VisitMap,
) -> Result<ResolveStats, EvalError> {
    let mut stats = ResolveStats::default();
    if !grid.contains(&start) || !visits.contains(&start) {
        return Err(EvalError::OutsideGrid { cell: start });
    }
    if visits.get(&start) == VisitState::Resolved {
        return Ok(stats);
    }

    debug!("resolving {start}");
    let mut pending = vec![start];

    while let Some(&cell) = pending.last() {
        visits.mark_in_progress(&cell);

        let value = match grid.get(&cell) {
            None | Some("") => 0.0,
            Some(text) => match scan(cell, text, grid, visits)? {
                Scan::Value(n) => n,
                Scan::Pause(dependency) => {
                    trace!("{cell} waits on {dependency}");
                    stats.pauses += 1;
                    pending.push(dependency);
                    continue;
                }
            },
        };

        let formatted = format_value(value);
        trace!("{cell} = {formatted}");
        let stored = grid.set(&cell, formatted);
        let marked = visits.mark_resolved(&cell);
        debug_assert!(stored && marked, "{cell} committed outside the grid");
        stats.committed += 1;
        pending.pop();
    }

    Ok(stats)
}

/// Scan a non-empty expression from its first token.
fn scan(cell: CellRef, text: &str, grid: &Grid, visits: &VisitMap) -> Result<Scan, EvalError> {
    let expression = text.trim();
    if expression.is_empty() {
        return Err(EvalError::EmptyExpression {
            cell,
            expression: text.to_string(),
        });
    }

    let fault = |fault: StackFault| stack_error(cell, text, fault);
    let mut stack = OperandStack::new();

    for token in expression.split_whitespace() {
        match Token::classify(token) {
            Token::Binary(op) => stack.apply_binary(op).map_err(fault)?,
            Token::Unary(op) => stack.apply_unary(op).map_err(fault)?,
            Token::Number(n) => stack.push(n),
            Token::Word(word) => {
                let invalid = || EvalError::InvalidExpression {
                    cell,
                    expression: text.to_string(),
                };
                let dependency =
                    CellRef::decode(word, grid.rows(), grid.cols()).ok_or_else(invalid)?;

                match visits.get(&dependency) {
                    VisitState::InProgress => {
                        return Err(EvalError::CycleDetected { cell: dependency });
                    }
                    VisitState::Resolved => {
                        let value = grid
                            .get(&dependency)
                            .and_then(parse_value)
                            .ok_or_else(invalid)?;
                        stack.push(value);
                    }
                    VisitState::Unvisited => return Ok(Scan::Pause(dependency)),
                }
            }
        }
    }

    stack.finish().map(Scan::Value).map_err(fault)
}

fn stack_error(cell: CellRef, text: &str, fault: StackFault) -> EvalError {
    let expression = text.to_string();
    match fault {
        StackFault::Underflow { operator } => EvalError::RpnUnderflow {
            cell,
            expression,
            operator,
        },
        StackFault::Overflow => EvalError::RpnOverflow { cell, expression },
        StackFault::DivideByZero => EvalError::DivideByZero { cell, expression },
    }
}

/// Evaluate every cell of the grid in row-major order.
///
/// Starts from a fresh all-unvisited state and stops at the first failure,
/// leaving the grid partially evaluated.
pub fn evaluate_grid(grid: &mut Grid) -> Result<ResolveStats, EvalError> {
    let mut visits = VisitMap::for_grid(grid);
    let mut stats = ResolveStats::default();

    for cell in grid.cell_refs() {
        if visits.get(&cell) == VisitState::Unvisited {
            stats += resolve(cell, grid, &mut visits)?;
        }
    }

    info!(
        "evaluated {}x{} grid: {} cells committed, {} pauses",
        grid.rows(),
        grid.cols(),
        stats.committed,
        stats.pauses
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ErrorKind;
    use pretty_assertions::assert_eq;

    fn grid(rows: usize, cols: usize, cells: &[&str]) -> Grid {
        Grid::from_cells(rows, cols, cells.iter().map(|s| Some(s.to_string()))).unwrap()
    }

    fn values(grid: &Grid) -> Vec<String> {
        grid.iter()
            .map(|(_, text)| text.unwrap_or_default().to_string())
            .collect()
    }

    fn single(expression: &str) -> Result<String, EvalError> {
        let mut g = grid(1, 1, &[expression]);
        evaluate_grid(&mut g)?;
        Ok(g.get(&CellRef::new(0, 0)).unwrap_or_default().to_string())
    }

    #[test]
    fn test_postfix_values() {
        assert_eq!(single("2 3 +").unwrap(), "5.00000");
        assert_eq!(single("23.3 5 16.2 + -8 * -").unwrap(), "192.90000");
        assert_eq!(single("2 3 / 3 -2 / *").unwrap(), "-1.00000");
        assert_eq!(single("  7  ").unwrap(), "7.00000");
        assert_eq!(single("3 ++ ++ -- 2 *").unwrap(), "8.00000");
    }

    #[test]
    fn test_absent_and_empty_cells_are_zero() {
        let mut g = Grid::from_cells(1, 3, vec![None, Some(String::new()), Some("A1 A2 +".into())])
            .unwrap();
        evaluate_grid(&mut g).unwrap();
        assert_eq!(values(&g), vec!["0.00000", "0.00000", "0.00000"]);
    }

    #[test]
    fn test_whitespace_only_is_empty_expression() {
        let err = single("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyExpression);
        assert_eq!(err.to_string(), "Illegal Argument     at cell A1");
    }

    #[test]
    fn test_divide_by_zero() {
        let expression = "-52.2 12 + -17 - 9.7 10 0 / + -";
        let err = single(expression).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("The RPN equation {expression} at cell A1 attempted to divide by zero")
        );
        assert_eq!(single("5 0 /").unwrap_err().kind(), ErrorKind::DivideByZero);
    }

    #[test]
    fn test_underflow() {
        let expression = "-12 * 3 -15 18.723 - + -52 /";
        let err = single(expression).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Operator * occured before there were enough numerical values for it to evaluate in the expression {expression} at cell A1"
            )
        );
        assert_eq!(single("+").unwrap_err().kind(), ErrorKind::RpnUnderflow);
        assert_eq!(single("--").unwrap_err().kind(), ErrorKind::RpnUnderflow);
    }

    #[test]
    fn test_overflow() {
        let expression = "12.2 -17 / -33.333 - 12";
        let err = single(expression).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Extra Operands in the expression {expression} at cell A1")
        );
        assert_eq!(single("1 2 3").unwrap_err().kind(), ErrorKind::RpnOverflow);
    }

    #[test]
    fn test_invalid_token() {
        let err = single("1 foo +").unwrap_err();
        assert_eq!(err.to_string(), "The expression 1 foo + at cell A1 is not valid");
    }

    #[test]
    fn test_non_finite_spellings_are_invalid() {
        for expression in ["-inf", "+NaN", "-infinity 1 +", "inf", "NaN"] {
            let err = single(expression).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidExpression, "{expression}");
        }
    }

    #[test]
    fn test_reference_resolution() {
        let mut g = grid(1, 2, &["A2 2 +", "3"]);
        let stats = evaluate_grid(&mut g).unwrap();
        assert_eq!(values(&g), vec!["5.00000", "3.00000"]);
        assert_eq!(stats, ResolveStats { committed: 2, pauses: 1 });
    }

    #[test]
    fn test_reference_across_rows() {
        let mut g = grid(2, 1, &["B1 2 +", "3"]);
        evaluate_grid(&mut g).unwrap();
        assert_eq!(values(&g), vec!["5.00000", "3.00000"]);
    }

    #[test]
    fn test_out_of_bounds_reference_is_invalid() {
        let mut g = grid(2, 3, &["1", "2", "3", "A1 B4 +", "", ""]);
        let err = evaluate_grid(&mut g).unwrap_err();
        assert_eq!(err.to_string(), "The expression A1 B4 + at cell B1 is not valid");

        let mut g = grid(2, 3, &["1", "2", "3", "A1 B0 +", "", ""]);
        let err = evaluate_grid(&mut g).unwrap_err();
        assert_eq!(err.to_string(), "The expression A1 B0 + at cell B1 is not valid");
    }

    #[test]
    fn test_self_reference_is_cycle() {
        let err = single("A1 1 +").unwrap_err();
        assert_eq!(err, EvalError::CycleDetected { cell: CellRef::new(0, 0) });
        assert_eq!(err.to_string(), "Cycle detected at cell A1");
    }

    #[test]
    fn test_cycle_names_in_progress_cell() {
        // A1 -> A2 -> B1 -> A1
        let mut g = grid(2, 2, &["A2", "B1", "A1", "1"]);
        let err = evaluate_grid(&mut g).unwrap_err();
        assert_eq!(err.to_string(), "Cycle detected at cell A1");
    }

    #[test]
    fn test_shared_dependency_is_committed_once() {
        let mut g = grid(1, 3, &["A3 1 +", "A3 2 +", "5"]);
        let stats = evaluate_grid(&mut g).unwrap();
        assert_eq!(values(&g), vec!["6.00000", "7.00000", "5.00000"]);
        assert_eq!(stats.committed, 3);
        // Only A1 pauses; A2 finds A3 already resolved.
        assert_eq!(stats.pauses, 1);
    }

    #[test]
    fn test_rescan_after_each_pause() {
        let mut g = grid(1, 4, &["A2 A3 + A4 *", "1", "2", "10"]);
        let stats = evaluate_grid(&mut g).unwrap();
        assert_eq!(values(&g)[0], "30.00000");
        assert_eq!(stats.pauses, 3);
    }

    #[test]
    fn test_resolve_resolved_cell_is_noop() {
        let mut g = grid(1, 2, &["A2", "4"]);
        let mut visits = VisitMap::for_grid(&g);
        let a1 = CellRef::new(0, 0);
        let first = resolve(a1, &mut g, &mut visits).unwrap();
        assert_eq!(first.committed, 2);
        assert_eq!(visits.count(VisitState::Resolved), 2);

        let again = resolve(a1, &mut g, &mut visits).unwrap();
        assert_eq!(again, ResolveStats::default());
        assert_eq!(g.get(&a1), Some("4.00000"));
    }

    #[test]
    fn test_resolve_outside_grid_leaves_state_untouched() {
        let mut g = grid(2, 3, &["B3", "", "", "", "", "1 2 +"]);
        let mut visits = VisitMap::for_grid(&g);
        let outside = CellRef::new(0, 5);

        let err = resolve(outside, &mut g, &mut visits).unwrap_err();
        assert_eq!(err, EvalError::OutsideGrid { cell: outside });
        assert_eq!(err.kind(), ErrorKind::OutsideGrid);
        assert_eq!(visits.count(VisitState::Unvisited), 6);
        assert_eq!(g.get(&CellRef::new(1, 2)), Some("1 2 +"));

        let stats = resolve(CellRef::new(0, 0), &mut g, &mut visits).unwrap();
        assert_eq!(stats.committed, 2);
        assert_eq!(g.get(&CellRef::new(0, 0)), Some("3.00000"));
    }

    #[test]
    fn test_error_keeps_original_untrimmed_text() {
        let err = single(" 1 2 ").unwrap_err();
        assert_eq!(err.to_string(), "Extra Operands in the expression  1 2  at cell A1");
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let cols = 100_000;
        let cells = (0..cols).map(|c| {
            if c + 1 == cols {
                Some("33".to_string())
            } else {
                Some(format!("A{}", c + 2))
            }
        });
        let mut g = Grid::from_cells(1, cols, cells).unwrap();
        let stats = evaluate_grid(&mut g).unwrap();
        assert_eq!(stats.committed, cols);
        assert!(g.iter().all(|(_, text)| text == Some("33.00000")));
    }
}
