use maze_pathfinding::algorithms::reference::Dijkstra;
use maze_pathfinding::{
    AStar, AgentPlan, Cell, Direction, DirectionField, Grid, Heuristic, PathfindingAlgorithm,
    PlanState, SearchOutcome,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cells(grid: &Grid) -> Vec<Cell> {
    (0..grid.height() as i32)
        .flat_map(|y| (0..grid.width() as i32).map(move |x| Cell::new(x, y)))
        .collect()
}

fn reference_cost(grid: &Grid, origin: Cell, destination: Cell) -> Option<u32> {
    Dijkstra::new()
        .search(grid, origin, destination)
        .field()
        .and_then(|field| field.cost_from(destination))
}

fn random_grid(rng: &mut StdRng) -> Grid {
    let width = rng.gen_range(2..10);
    let height = rng.gen_range(2..10);
    let walls = rng.gen_range(0..=(width * height) / 3);
    Grid::with_random_walls(width, height, walls, &[], rng)
}

fn assert_walkable(grid: &Grid, field: &DirectionField, from: Cell) {
    let path = field.path_from(from).expect("field leads back to its root");
    for pair in path.windows(2) {
        assert!(grid.is_open(pair[1]), "path enters {}", pair[1]);
        assert!(pair[0].direction_to(pair[1]).is_some());
    }
}

#[test]
fn manhattan_is_optimal_on_open_boards() {
    for (width, height) in [(3, 3), (5, 5), (6, 4)] {
        let grid = Grid::new(width, height);
        let mut a_star = AStar::new();
        for &origin in &cells(&grid) {
            for &destination in &cells(&grid) {
                let outcome = a_star.search(&grid, origin, destination);
                let field = outcome.field().expect("open boards are connected");
                assert_eq!(
                    field.cost_from(destination),
                    reference_cost(&grid, origin, destination),
                    "{} -> {} on {}x{}",
                    origin,
                    destination,
                    width,
                    height
                );
            }
        }
    }
}

#[test]
fn octile_is_optimal_with_obstacles() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut a_star = AStar::with_heuristic(Heuristic::Octile);

    for _ in 0..400 {
        let grid = random_grid(&mut rng);
        let origin = Cell::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );
        let destination = Cell::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );

        let expected = if grid.passable(destination) || origin == destination {
            reference_cost(&grid, origin, destination)
        } else {
            None
        };
        let outcome = a_star.search(&grid, origin, destination);
        assert_eq!(
            outcome.field().and_then(|field| field.cost_from(destination)),
            expected,
            "{} -> {}",
            origin,
            destination
        );
    }
}

#[test]
fn manhattan_paths_are_valid_and_never_beat_the_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut a_star = AStar::new();

    for _ in 0..400 {
        let grid = random_grid(&mut rng);
        let open: Vec<Cell> = cells(&grid)
            .into_iter()
            .filter(|cell| grid.passable(*cell))
            .collect();
        if open.len() < 2 {
            continue;
        }
        let origin = open[rng.gen_range(0..open.len())];
        let destination = open[rng.gen_range(0..open.len())];

        let reference = reference_cost(&grid, origin, destination);
        match a_star.search(&grid, origin, destination) {
            SearchOutcome::Found(field) => {
                assert_walkable(&grid, &field, destination);
                let cost = field.cost_from(destination).unwrap();
                assert!(cost >= reference.unwrap());
            }
            SearchOutcome::Exhausted => assert_eq!(reference, None),
        }
        assert!(a_star.last_stats().expanded <= grid.width() * grid.height());
    }
}

#[test]
fn isolated_destination_exhausts_within_the_board() {
    // Ring of walls around (3, 3) on a 7x7 board.
    let ring = (2..=4)
        .flat_map(|x| (2..=4).map(move |y| Cell::new(x, y)))
        .filter(|&cell| cell != Cell::new(3, 3));
    let grid = Grid::with_blocks(7, 7, ring).unwrap();

    for heuristic in [Heuristic::Manhattan, Heuristic::Octile] {
        let mut a_star = AStar::with_heuristic(heuristic);
        assert_eq!(
            a_star.search(&grid, Cell::new(0, 0), Cell::new(3, 3)),
            SearchOutcome::Exhausted
        );
        assert_eq!(
            a_star.search(&grid, Cell::new(3, 3), Cell::new(0, 0)),
            SearchOutcome::Exhausted
        );
        assert!(a_star.last_stats().expanded <= 49);
    }
}

#[test]
fn repeated_searches_are_identical() {
    let grid = layout_like_board();
    let mut a_star = AStar::new();
    let origin = Cell::new(0, 0);
    let destination = Cell::new(9, 6);

    let first = a_star.search(&grid, origin, destination);
    let first_stats = a_star.last_stats();
    for _ in 0..5 {
        assert_eq!(a_star.search(&grid, origin, destination), first);
        assert_eq!(a_star.last_stats(), first_stats);
    }
    assert!(first.is_found());
}

#[test]
fn wall_insertion_order_does_not_change_the_result() {
    let walls: Vec<Cell> = layout_like_board().walls();
    let forward = Grid::with_blocks(10, 7, walls.iter().copied()).unwrap();
    let backward = Grid::with_blocks(10, 7, walls.iter().rev().copied()).unwrap();

    let mut a_star = AStar::new();
    for destination in [Cell::new(9, 6), Cell::new(9, 0), Cell::new(6, 6)] {
        assert_eq!(
            a_star.search(&forward, Cell::new(0, 0), destination),
            a_star.search(&backward, Cell::new(0, 0), destination)
        );
    }
}

#[test]
fn equal_cost_routes_follow_the_cell_order() {
    // Several detours around the blocked centre cost 34; the queue tie-break
    // on cell order settles on the one through (0, 1).
    let grid = Grid::with_blocks(3, 3, [Cell::new(1, 1)]).unwrap();
    let mut a_star = AStar::new();
    for _ in 0..3 {
        let outcome = a_star.search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        let path = outcome.field().unwrap().path_from(Cell::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 1), Cell::new(0, 0)]
        );
    }
}

#[test]
fn agent_on_open_three_by_three_steps_diagonally() {
    let grid = Grid::new(3, 3);
    let mut a_star = AStar::new();
    let mut plan = AgentPlan::new(Cell::new(2, 2), Cell::new(0, 0));

    assert_eq!(plan.replan(&grid, &mut a_star), PlanState::Moving);
    assert_eq!(plan.next_step(Cell::new(2, 2)), Ok(Direction::NorthWest));
    assert_eq!(plan.field().unwrap().cost_from(Cell::new(2, 2)), Some(28));
}

#[test]
fn agent_routes_around_a_blocked_centre() {
    let grid = Grid::with_blocks(3, 3, [Cell::new(1, 1)]).unwrap();
    let mut a_star = AStar::new();
    let mut plan = AgentPlan::new(Cell::new(2, 2), Cell::new(0, 0));

    assert_eq!(plan.replan(&grid, &mut a_star), PlanState::Moving);
    let path = plan.path().unwrap();
    assert!(!path.contains(&Cell::new(1, 1)));
    assert_eq!(
        plan.field().unwrap().cost_from(Cell::new(2, 2)),
        reference_cost(&grid, Cell::new(0, 0), Cell::new(2, 2))
    );
}

fn layout_like_board() -> Grid {
    let walls = [
        (2, 0),
        (2, 1),
        (2, 2),
        (2, 3),
        (2, 4),
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 5),
        (5, 6),
        (7, 0),
        (7, 1),
        (7, 2),
        (8, 4),
        (9, 4),
    ];
    Grid::with_blocks(10, 7, walls.into_iter().map(|(x, y)| Cell::new(x, y))).unwrap()
}
