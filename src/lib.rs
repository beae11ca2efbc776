//! # grid_bfs_pathfinder
//!
//! Interactive pathfinding on a 4-connected grid. A user places a start cell,
//! an end cell and walls, then runs a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! that expands one frontier cell per [step](search::SearchEngine::step), so a
//! frame loop can animate its progress. Once the end is reached the shortest
//! path is reconstructed from predecessor links.
//!
//! The [controller::InteractionController] owns the [grid::Grid] and decides
//! when edits are accepted and when the search may advance. Drawing is left to
//! an implementor of [render::RenderPort].
pub mod cell;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod render;
pub mod search;

pub use cell::{Cell, CellId, Role};
pub use config::GridConfig;
pub use controller::{Flow, InputEvent, InteractionController, State};
pub use error::{PathfinderError, Precondition, Result};
pub use grid::{Grid, RoleCounts};
pub use render::{CellView, RenderPort, Snapshot, TextRenderer};
pub use search::{SearchEngine, SearchStatus};
