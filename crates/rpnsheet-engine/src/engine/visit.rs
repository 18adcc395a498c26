//! Per-cell visitation marking used to detect cycles and skip resolved cells.

use super::cell_ref::CellRef;
use super::grid::Grid;

/// Where a cell is in its resolution.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum VisitState {
    /// Never started.
    #[default]
    Unvisited,
    /// On the active resolution path; an ancestor is waiting on it.
    InProgress,
    /// Value committed to the grid.
    Resolved,
}

/// Visitation state for every cell of a grid, laid out like the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitMap {
    rows: usize,
    cols: usize,
    states: Vec<VisitState>,
}

impl VisitMap {
    pub fn new(rows: usize, cols: usize) -> VisitMap {
        VisitMap {
            rows,
            cols,
            states: vec![VisitState::Unvisited; rows * cols],
        }
    }

    pub fn for_grid(grid: &Grid) -> VisitMap {
        VisitMap::new(grid.rows(), grid.cols())
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// State of a cell. Cells outside the map are always unvisited.
    pub fn get(&self, cell: &CellRef) -> VisitState {
        if !self.contains(cell) {
            return VisitState::Unvisited;
        }
        self.states[cell.index(self.cols)]
    }

    /// Enter (or re-enter after a pause) a cell.
    /// Returns false if the cell is outside the map.
    pub fn mark_in_progress(&mut self, cell: &CellRef) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let state = &mut self.states[cell.index(self.cols)];
        debug_assert_ne!(*state, VisitState::Resolved, "cell {cell} already resolved");
        *state = VisitState::InProgress;
        true
    }

    /// Returns false if the cell is outside the map.
    pub fn mark_resolved(&mut self, cell: &CellRef) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.states[cell.index(self.cols)] = VisitState::Resolved;
        true
    }

    /// Mark every cell unvisited again.
    pub fn reset(&mut self) {
        self.states.fill(VisitState::Unvisited);
    }

    pub fn count(&self, state: VisitState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}
