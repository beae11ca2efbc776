//! The interaction state machine. Edits are only accepted while [State::Editing];
//! once a search runs the grid is frozen until the result is acknowledged or the
//! grid is reset.
use log::{debug, info, warn};

use crate::cell::Role;
use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::render::{RenderPort, Snapshot};
use crate::search::{SearchEngine, SearchStatus};

/// Logical input, already translated from pixels to cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Places the start, then the end, then walls.
    PlaceOrCycle { x: i32, y: i32 },
    Erase { x: i32, y: i32 },
    RequestSearchStart,
    /// Advances a running search by one expansion.
    Tick,
    /// Dismisses a finished search and returns to editing, keeping the layout.
    Acknowledge,
    EndSession,
    /// Clears the whole grid from any state.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Editing,
    Searching(SearchStatus),
}

/// Tells the driving loop whether to keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    grid: Grid,
    engine: Option<SearchEngine>,
}

impl InteractionController {
    pub fn new(config: GridConfig) -> Result<InteractionController> {
        Ok(InteractionController::with_grid(Grid::new(config)?))
    }

    pub fn with_grid(grid: Grid) -> InteractionController {
        InteractionController { grid, engine: None }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn engine(&self) -> Option<&SearchEngine> {
        self.engine.as_ref()
    }
    pub fn state(&self) -> State {
        match &self.engine {
            Some(engine) => State::Searching(engine.status()),
            None => State::Editing,
        }
    }

    /// Applies one event. A refused operation is returned as an error and
    /// leaves the state unchanged.
    pub fn handle(&mut self, event: InputEvent) -> Result<Flow> {
        match event {
            InputEvent::PlaceOrCycle { x, y } => self.place(x, y)?,
            InputEvent::Erase { x, y } => self.erase(x, y)?,
            InputEvent::RequestSearchStart => self.begin_search()?,
            InputEvent::Tick => self.advance(),
            InputEvent::Acknowledge => self.acknowledge(),
            InputEvent::EndSession => {
                info!("Session ended");
                return Ok(Flow::Exit);
            }
            InputEvent::Reset => {
                self.engine = None;
                self.grid.clear();
            }
        }
        Ok(Flow::Continue)
    }

    /// Runs one iteration of the driving loop: applies the pending events, then
    /// advances a running search by one step, then renders. A search never
    /// advances more than once per frame, so [InputEvent::Tick] events in the
    /// batch are folded into the frame's own step. Refused events are logged
    /// and dropped.
    pub fn frame<I, R>(&mut self, events: I, port: &mut R) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
        R: RenderPort + ?Sized,
    {
        for event in events {
            if event == InputEvent::Tick {
                continue;
            }
            match self.handle(event) {
                Ok(Flow::Exit) => return Flow::Exit,
                Ok(Flow::Continue) => {}
                Err(e) => warn!("Ignoring {event:?}: {e}"),
            }
        }
        self.advance();
        port.render(&self.snapshot());
        Flow::Continue
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        match &self.engine {
            Some(engine) => Snapshot::new(&self.grid, engine.path(), Some(engine.status())),
            None => Snapshot::new(&self.grid, &[], None),
        }
    }

    fn place(&mut self, x: i32, y: i32) -> Result<()> {
        if self.engine.is_some() {
            debug!("Search in progress, ignoring placement at ({x}, {y})");
            return Ok(());
        }
        let id = self.grid.cell_at(x, y)?;
        let role = self.grid.cell(id).role();
        if self.grid.start().is_none() && !matches!(role, Role::Wall | Role::End) {
            self.grid.set_role(id, Role::Start)
        } else if self.grid.end().is_none() && !matches!(role, Role::Wall | Role::Start) {
            self.grid.set_role(id, Role::End)
        } else if !matches!(role, Role::Start | Role::End) {
            self.grid.set_role(id, Role::Wall)
        } else {
            Ok(())
        }
    }

    fn erase(&mut self, x: i32, y: i32) -> Result<()> {
        if self.engine.is_some() {
            debug!("Search in progress, ignoring erase at ({x}, {y})");
            return Ok(());
        }
        let id = self.grid.cell_at(x, y)?;
        self.grid.reset_cell(id);
        Ok(())
    }

    fn begin_search(&mut self) -> Result<()> {
        if self.engine.is_some() {
            debug!("Search already started");
            return Ok(());
        }
        if !self.grid.adjacency_ready() {
            self.grid.compute_adjacency();
        }
        let mut engine = SearchEngine::new(&self.grid)?;
        if let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) {
            if !self.grid.reachable(start, end) {
                info!("Start and end are on different components, expecting no path");
            }
        }
        engine.start(&mut self.grid);
        self.engine = Some(engine);
        Ok(())
    }

    fn advance(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.step(&mut self.grid);
        }
    }

    fn acknowledge(&mut self) {
        match &self.engine {
            Some(engine) if engine.status().is_terminal() => {
                self.engine = None;
                self.grid.clear_search_marks();
                debug!("Search result acknowledged, back to editing");
            }
            _ => debug!("Nothing to acknowledge"),
        }
    }
}
