//! Incremental breadth-first search. The caller decides the pace: every call to
//! [SearchEngine::step] expands exactly one frontier cell, which lets a frame
//! loop animate the search one expansion at a time.
use std::collections::VecDeque;
use std::iter;

use log::{debug, info};

use crate::cell::{CellId, Role};
use crate::error::{Precondition, Result};
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Running,
    Found,
    Unreachable,
}

impl SearchStatus {
    /// Whether the search has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Found | SearchStatus::Unreachable)
    }
}

/// State of one search attempt over a [Grid]. The grid is passed to each call
/// rather than borrowed for the engine's lifetime, so the owner can keep
/// reading it between steps.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    start: CellId,
    end: CellId,
    frontier: VecDeque<CellId>,
    path: Vec<CellId>,
    status: SearchStatus,
    expansions: usize,
}

impl SearchEngine {
    /// Requires a start and an end on distinct cells and computed adjacency.
    pub fn new(grid: &Grid) -> Result<SearchEngine> {
        let start = grid.start().ok_or(Precondition::MissingStart)?;
        let end = grid.end().ok_or(Precondition::MissingEnd)?;
        if start == end {
            return Err(Precondition::StartIsEnd.into());
        }
        if !grid.adjacency_ready() {
            return Err(Precondition::AdjacencyNotComputed.into());
        }
        Ok(SearchEngine {
            start,
            end,
            frontier: VecDeque::new(),
            path: Vec::new(),
            status: SearchStatus::Idle,
            expansions: 0,
        })
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn frontier(&self) -> &VecDeque<CellId> {
        &self.frontier
    }
    /// Cells strictly between end and start, ordered from the end's
    /// predecessor back towards the start. Empty unless [SearchStatus::Found].
    pub fn path(&self) -> &[CellId] {
        &self.path
    }
    /// Number of moves on the found path.
    pub fn path_length(&self) -> Option<usize> {
        (self.status == SearchStatus::Found).then(|| self.path.len() + 1)
    }
    /// Number of cells dequeued so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Clears all search tags and seeds the frontier with the start cell.
    pub fn start(&mut self, grid: &mut Grid) {
        grid.clear_search_marks();
        self.frontier.clear();
        self.path.clear();
        self.expansions = 0;
        let start = grid.cell_mut(self.start);
        start.visited = true;
        start.frontier_queued = true;
        self.frontier.push_back(self.start);
        self.status = SearchStatus::Running;
        info!(
            "Searching from {} to {}",
            grid.cell(self.start).position(),
            grid.cell(self.end).position()
        );
    }

    /// Expands the oldest frontier cell. Does nothing unless the search is
    /// running.
    pub fn step(&mut self, grid: &mut Grid) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        let Some(current) = self.frontier.pop_front() else {
            self.status = SearchStatus::Unreachable;
            info!(
                "{} cannot be reached after {} expansions",
                grid.cell(self.end).position(),
                self.expansions
            );
            return self.status;
        };
        self.expansions += 1;
        grid.cell_mut(current).visited = true;

        if current == self.end {
            self.path = self.reconstruct(grid);
            self.status = SearchStatus::Found;
            info!(
                "Found path of {} moves after {} expansions",
                self.path.len() + 1,
                self.expansions
            );
            return self.status;
        }

        let neighbours = grid.cell(current).neighbours.clone();
        for n in neighbours {
            let cell = grid.cell_mut(n);
            if cell.role != Role::Wall && !cell.frontier_queued {
                cell.frontier_queued = true;
                cell.predecessor = Some(current);
                self.frontier.push_back(n);
            }
        }
        debug!(
            "Expanded {}, frontier holds {}",
            grid.cell(current).position(),
            self.frontier.len()
        );
        self.status
    }

    /// Steps until the search is no longer running.
    pub fn run_to_completion(&mut self, grid: &mut Grid) -> SearchStatus {
        if self.status == SearchStatus::Idle {
            self.start(grid);
        }
        while self.step(grid) == SearchStatus::Running {}
        self.status
    }

    fn reconstruct(&self, grid: &Grid) -> Vec<CellId> {
        let start = self.start;
        iter::successors(grid.cell(self.end).predecessor, |&id| {
            grid.cell(id).predecessor
        })
        .take_while(|&id| id != start)
        .collect()
    }
}
