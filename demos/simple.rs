use grid_bfs_pathfinder::{
    Flow, GridConfig, InputEvent, InteractionController, RenderPort, SearchStatus, Snapshot, State,
};

// In this example a path is found on a 7x5 grid with shape
//  _______
// |S      |
// |  ###  |
// |  # #  |
// |  #   E|
// |       |
//  _______
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Every frame expands one frontier cell and prints the grid. Run with
// `RUST_LOG=debug` to see each expansion logged.

struct StdoutRenderer;

impl RenderPort for StdoutRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        println!("{snapshot}");
    }
}

fn main() {
    env_logger::init();
    let mut controller = InteractionController::new(GridConfig::new(7, 5)).unwrap();
    let mut events = vec![
        InputEvent::PlaceOrCycle { x: 0, y: 0 },
        InputEvent::PlaceOrCycle { x: 6, y: 3 },
    ];
    for (x, y) in [(2, 1), (3, 1), (4, 1), (2, 2), (4, 2), (2, 3)] {
        events.push(InputEvent::PlaceOrCycle { x, y });
    }
    events.push(InputEvent::RequestSearchStart);

    let mut renderer = StdoutRenderer;
    let mut pending = events;
    loop {
        if controller.frame(pending.drain(..), &mut renderer) == Flow::Exit {
            break;
        }
        if let State::Searching(status) = controller.state() {
            if status != SearchStatus::Running {
                pending.push(InputEvent::EndSession);
            }
        }
    }
    if let Some(moves) = controller.engine().and_then(|e| e.path_length()) {
        println!("Shortest path takes {moves} moves");
    }
}
