use core::fmt;

use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellId, Role};
use crate::config::GridConfig;
use crate::error::{PathfinderError, Result};

/// Number of cells holding each [Role].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub empty: usize,
    pub start: usize,
    pub end: usize,
    pub wall: usize,
}

/// [Grid] owns a fixed `columns x rows` block of [Cell]s stored row-major, and
/// caches which cells currently hold the [Role::Start] and [Role::End] roles so
/// there is never more than one of each.
#[derive(Clone, Debug)]
pub struct Grid {
    columns: i32,
    rows: i32,
    cells: Vec<Cell>,
    start: Option<CellId>,
    end: Option<CellId>,
    adjacency_ready: bool,
}

impl Grid {
    pub fn new(config: GridConfig) -> Result<Grid> {
        Grid::create(config.columns, config.rows)
    }

    /// Allocates `columns * rows` empty cells. Fails with
    /// [PathfinderError::InvalidDimensions] unless both are positive.
    pub fn create(columns: i32, rows: i32) -> Result<Grid> {
        if columns <= 0 || rows <= 0 {
            return Err(PathfinderError::InvalidDimensions { columns, rows });
        }
        let cells = iproduct!(0..rows, 0..columns)
            .map(|(y, x)| Cell::new(x, y))
            .collect::<Vec<Cell>>();
        info!("Created {columns}x{rows} grid");
        Ok(Grid {
            columns,
            rows,
            cells,
            start: None,
            end: None,
            adjacency_ready: false,
        })
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }
    pub fn rows(&self) -> i32 {
        self.rows
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn start(&self) -> Option<CellId> {
        self.start
    }
    pub fn end(&self) -> Option<CellId> {
        self.end
    }
    pub fn adjacency_ready(&self) -> bool {
        self.adjacency_ready
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.columns && y < self.rows
    }

    fn index_of(&self, x: i32, y: i32) -> CellId {
        CellId((y * self.columns + x) as usize)
    }

    /// Bounds-checked lookup. Coordinates outside the grid are rejected, never
    /// clamped.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<CellId> {
        if self.in_bounds(x, y) {
            Ok(self.index_of(x, y))
        } else {
            Err(PathfinderError::OutOfBounds { x, y })
        }
    }

    pub fn cell_at_point(&self, point: Point) -> Result<CellId> {
        self.cell_at(point.x, point.y)
    }

    /// # Panics
    ///
    /// Panics if `id` was obtained from a larger grid and lies outside this
    /// grid's storage.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(ix, c)| (CellId(ix), c))
    }

    /// Fills the neighbour list of every cell in west, east, north, south
    /// order. Running it again recomputes identical lists.
    pub fn compute_adjacency(&mut self) {
        for (y, x) in iproduct!(0..self.rows, 0..self.columns) {
            let neighbours = [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .into_iter()
                .filter(|&(nx, ny)| self.in_bounds(nx, ny))
                .map(|(nx, ny)| self.index_of(nx, ny))
                .collect::<SmallVec<[CellId; 4]>>();
            let id = self.index_of(x, y);
            self.cell_mut(id).neighbours = neighbours;
        }
        self.adjacency_ready = true;
        debug!("Computed adjacency for {} cells", self.cells.len());
    }

    /// Assigns a role while keeping at most one start and one end. Making a
    /// wall the start or end is refused with [PathfinderError::RoleConflict].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this grid's storage, see [Grid::cell].
    pub fn set_role(&mut self, id: CellId, role: Role) -> Result<()> {
        let current = self.cell(id).role;
        if current == Role::Wall && matches!(role, Role::Start | Role::End) {
            let p = self.cell(id).position();
            return Err(PathfinderError::RoleConflict { x: p.x, y: p.y, role });
        }
        if current == role {
            return Ok(());
        }
        // The cell loses whatever unique role it held.
        match current {
            Role::Start => self.start = None,
            Role::End => self.end = None,
            _ => {}
        }
        match role {
            Role::Start => {
                if let Some(previous) = self.start.replace(id) {
                    self.cell_mut(previous).role = Role::Empty;
                }
            }
            Role::End => {
                if let Some(previous) = self.end.replace(id) {
                    self.cell_mut(previous).role = Role::Empty;
                }
            }
            _ => {}
        }
        self.cell_mut(id).role = role;
        debug!("{} is now {}", self.cell(id).position(), role);
        Ok(())
    }

    /// Returns the cell to an empty, unsearched state. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this grid's storage, see [Grid::cell].
    pub fn reset_cell(&mut self, id: CellId) {
        if self.start == Some(id) {
            self.start = None;
        }
        if self.end == Some(id) {
            self.end = None;
        }
        self.cell_mut(id).reset();
    }

    /// Clears the search tags of every cell, leaving roles in place.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_search_marks();
        }
    }

    /// Resets every cell. Adjacency is kept since the dimensions never change.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
        self.start = None;
        self.end = None;
        info!("Cleared grid");
    }

    pub fn role_counts(&self) -> RoleCounts {
        self.cells
            .iter()
            .fold(RoleCounts::default(), |mut counts, cell| {
                match cell.role {
                    Role::Empty => counts.empty += 1,
                    Role::Start => counts.start += 1,
                    Role::End => counts.end += 1,
                    Role::Wall => counts.wall += 1,
                }
                counts
            })
    }

    /// Builds a [UnionFind] over the non-wall cells, joining orthogonal
    /// neighbours into connected components.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for (y, x) in iproduct!(0..self.rows, 0..self.columns) {
            let ix = self.index_of(x, y);
            if self.cell(ix).is_wall() {
                continue;
            }
            for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                if self.in_bounds(nx, ny) {
                    let nix = self.index_of(nx, ny);
                    if !self.cell(nix).is_wall() {
                        components.union(ix.0, nix.0);
                    }
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` lie on the same connected component of non-wall
    /// cells.
    pub fn reachable(&self, a: CellId, b: CellId) -> bool {
        if self.cell(a).is_wall() || self.cell(b).is_wall() {
            return false;
        }
        self.components().equiv(a.0, b.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.columns as usize) {
            let line = row
                .iter()
                .map(|cell| match cell.role {
                    Role::Start => 'S',
                    Role::End => 'E',
                    Role::Wall => '#',
                    Role::Empty if cell.visited => 'o',
                    Role::Empty if cell.frontier_queued => '+',
                    Role::Empty => '.',
                })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
