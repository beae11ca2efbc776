use core::fmt;

use grid_util::point::Point;
use smallvec::SmallVec;

/// Categorical function of a cell. A single tag makes states such as
/// "wall and start at once" unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Wall,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Empty => "empty",
            Role::Start => "start",
            Role::End => "end",
            Role::Wall => "wall",
        };
        f.write_str(name)
    }
}

/// Index of a cell in the row-major storage of its [Grid](crate::grid::Grid).
/// Used for predecessor links and adjacency, so the grid stays the only owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    position: Point,
    pub(crate) role: Role,
    pub(crate) frontier_queued: bool,
    pub(crate) visited: bool,
    pub(crate) predecessor: Option<CellId>,
    pub(crate) neighbours: SmallVec<[CellId; 4]>,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Cell {
        Cell {
            position: Point::new(x, y),
            role: Role::Empty,
            frontier_queued: false,
            visited: false,
            predecessor: None,
            neighbours: SmallVec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_wall(&self) -> bool {
        self.role == Role::Wall
    }
    pub fn frontier_queued(&self) -> bool {
        self.frontier_queued
    }
    pub fn visited(&self) -> bool {
        self.visited
    }
    pub fn predecessor(&self) -> Option<CellId> {
        self.predecessor
    }
    /// Orthogonal neighbours in west, east, north, south order. Empty until
    /// [Grid::compute_adjacency](crate::grid::Grid::compute_adjacency) has run.
    pub fn neighbours(&self) -> &[CellId] {
        &self.neighbours
    }

    pub(crate) fn clear_search_marks(&mut self) {
        self.frontier_queued = false;
        self.visited = false;
        self.predecessor = None;
    }

    pub(crate) fn reset(&mut self) {
        self.role = Role::Empty;
        self.clear_search_marks();
    }
}
