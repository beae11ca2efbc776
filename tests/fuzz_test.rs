/// Fuzzes the search by checking for many random grids that a path is found exactly when start and
/// end share a connected component, and that the found path is as short as an independent
/// distance computation says it should be.
use grid_bfs_pathfinder::{CellId, Grid, Role, SearchEngine, SearchStatus};
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: i32, h: i32, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::create(w, h).unwrap();
    for x in 0..w {
        for y in 0..h {
            if rng.gen_bool(0.4) {
                let id = grid.cell_at(x, y).unwrap();
                grid.set_role(id, Role::Wall).unwrap();
            }
        }
    }
    grid.compute_adjacency();
    grid
}

fn place_endpoints(grid: &mut Grid, start: Point, end: Point) -> (CellId, CellId) {
    let s = grid.cell_at_point(start).unwrap();
    let e = grid.cell_at_point(end).unwrap();
    grid.reset_cell(s);
    grid.reset_cell(e);
    grid.set_role(s, Role::Start).unwrap();
    grid.set_role(e, Role::End).unwrap();
    (s, e)
}

/// Plain distance flood fill over coordinates, independent of the engine's cell bookkeeping.
fn flood_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    let w = grid.columns();
    let h = grid.rows();
    let mut dist = vec![None; (w * h) as usize];
    let mut queue = VecDeque::new();
    dist[(start.y * w + start.x) as usize] = Some(0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[(p.y * w + p.x) as usize].unwrap();
        if p == end {
            return Some(d);
        }
        for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let (nx, ny) = (p.x + dx, p.y + dy);
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let n = grid.cell_at(nx, ny).unwrap();
            let ix = (ny * w + nx) as usize;
            if grid.cell(n).role() != Role::Wall && dist[ix].is_none() {
                dist[ix] = Some(d + 1);
                queue.push_back(Point::new(nx, ny));
            }
        }
    }
    None
}

fn visualize_grid(grid: &Grid) {
    print!("{grid}");
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let (s, e) = place_endpoints(&mut grid, start, end);
        let reachable = grid.reachable(s, e);
        let mut engine = SearchEngine::new(&grid).unwrap();
        let status = engine.run_to_completion(&mut grid);
        // Show the grid if the search disagrees with the components
        if (status == SearchStatus::Found) != reachable {
            visualize_grid(&grid);
        }
        assert_eq!(status == SearchStatus::Found, reachable);
        if status == SearchStatus::Unreachable {
            assert!(engine.frontier().is_empty());
        }
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let w = rng.gen_range(2..9);
        let h = rng.gen_range(2..9);
        let mut grid = random_grid(w, h, &mut rng);
        let start = Point::new(rng.gen_range(0..w), rng.gen_range(0..h));
        let end = Point::new(rng.gen_range(0..w), rng.gen_range(0..h));
        if start == end {
            continue;
        }
        place_endpoints(&mut grid, start, end);
        let expected = flood_distance(&grid, start, end);
        let mut engine = SearchEngine::new(&grid).unwrap();
        engine.run_to_completion(&mut grid);
        if engine.path_length() != expected {
            visualize_grid(&grid);
        }
        assert_eq!(engine.path_length(), expected);

        // Every link of the reconstructed chain is an orthogonal move through a non-wall cell.
        if expected.is_some() {
            let mut chain = vec![end];
            chain.extend(engine.path().iter().map(|&id| grid.cell(id).position()));
            chain.push(start);
            for pair in chain.windows(2) {
                let moves = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(moves, 1);
            }
            for &id in engine.path() {
                assert_eq!(grid.cell(id).role(), Role::Empty);
            }
        }
    }
}
