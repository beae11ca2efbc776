use grid_bfs_pathfinder::{Grid, Role, SearchEngine, SearchStatus};

// The end is cut off by a full wall column, so the search exhausts its frontier:
//  ___
// |S#E|
// | # |
// | # |
//  ___
fn main() {
    env_logger::init();
    let mut grid = Grid::create(3, 3).unwrap();
    grid.set_role(grid.cell_at(0, 0).unwrap(), Role::Start).unwrap();
    grid.set_role(grid.cell_at(2, 0).unwrap(), Role::End).unwrap();
    for y in 0..3 {
        grid.set_role(grid.cell_at(1, y).unwrap(), Role::Wall).unwrap();
    }
    grid.compute_adjacency();
    println!("{}", grid);

    let mut engine = SearchEngine::new(&grid).unwrap();
    engine.start(&mut grid);
    let mut steps = 0;
    while engine.step(&mut grid) == SearchStatus::Running {
        steps += 1;
    }
    println!("{}", grid);
    println!("{:?} after {} steps", engine.status(), steps);
}
