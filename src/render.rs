use core::fmt;

use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::cell::{CellId, Role};
use crate::grid::Grid;
use crate::search::SearchStatus;

/// What a renderer needs to know about one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub position: Point,
    pub role: Role,
    pub frontier_queued: bool,
    pub visited: bool,
    pub on_path: bool,
}

/// Read-only view of the grid and the current search, handed to a
/// [RenderPort] once per frame.
pub struct Snapshot<'a> {
    grid: &'a Grid,
    path: FxHashSet<CellId>,
    status: Option<SearchStatus>,
}

impl<'a> Snapshot<'a> {
    /// `status` is [None] while the grid is being edited.
    pub fn new(grid: &'a Grid, path: &[CellId], status: Option<SearchStatus>) -> Snapshot<'a> {
        Snapshot {
            grid,
            path: path.iter().copied().collect(),
            status,
        }
    }

    pub fn columns(&self) -> i32 {
        self.grid.columns()
    }
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }
    pub fn status(&self) -> Option<SearchStatus> {
        self.status
    }

    pub fn cell(&self, id: CellId) -> CellView {
        let cell = self.grid.cell(id);
        CellView {
            position: cell.position(),
            role: cell.role(),
            frontier_queued: cell.frontier_queued(),
            visited: cell.visited(),
            on_path: self.path.contains(&id),
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.cells().map(|(id, _)| self.cell(id))
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut column = 0;
        for view in self.cells() {
            // Roles take precedence over search tags, the path over plain marks.
            let symbol = match view.role {
                Role::Start => 'S',
                Role::End => 'E',
                Role::Wall => '#',
                Role::Empty if view.on_path => '*',
                Role::Empty if view.visited => 'o',
                Role::Empty if view.frontier_queued => '+',
                Role::Empty => '.',
            };
            write!(f, "{symbol}")?;
            column += 1;
            if column == self.columns() {
                writeln!(f)?;
                column = 0;
            }
        }
        match self.status {
            Some(status) => writeln!(f, "status: {status:?}"),
            None => writeln!(f, "status: editing"),
        }
    }
}

/// Consumer of per-frame snapshots, e.g. a window or terminal renderer.
pub trait RenderPort {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

/// Keeps the text form of the last rendered frame. Handy for headless drivers
/// and tests.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    pub frames: usize,
    pub last_frame: String,
}

impl RenderPort for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.frames += 1;
        self.last_frame = snapshot.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchEngine;

    #[test]
    fn snapshot_marks_path_cells() {
        let mut grid = Grid::create(3, 3).unwrap();
        grid.set_role(grid.cell_at(0, 0).unwrap(), Role::Start).unwrap();
        grid.set_role(grid.cell_at(2, 2).unwrap(), Role::End).unwrap();
        grid.set_role(grid.cell_at(1, 1).unwrap(), Role::Wall).unwrap();
        grid.compute_adjacency();
        let mut engine = SearchEngine::new(&grid).unwrap();
        engine.run_to_completion(&mut grid);

        let snapshot = Snapshot::new(&grid, engine.path(), Some(engine.status()));
        let on_path = snapshot.cells().filter(|v| v.on_path).count();
        assert_eq!(on_path, 3);
        assert!(!snapshot.cell(grid.start().unwrap()).on_path);
        assert_eq!(snapshot.to_string(), "S**\no#*\nooE\nstatus: Found\n");
    }

    #[test]
    fn text_renderer_counts_frames() {
        let grid = Grid::create(2, 1).unwrap();
        let mut renderer = TextRenderer::default();
        renderer.render(&Snapshot::new(&grid, &[], None));
        renderer.render(&Snapshot::new(&grid, &[], None));
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.last_frame, "..\nstatus: editing\n");
    }
}
