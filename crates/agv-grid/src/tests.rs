//! Unit tests for agv-grid.

use agv_core::Cell;

use crate::{AStarPlanner, Grid, GridError, OccupancySnapshot, Planner};

fn c(row: u32, col: u32) -> Cell {
    Cell::new(row, col)
}

/// Empty 5x5 grid with no stations or obstacles.
fn open_grid() -> Grid {
    Grid::builder(5, 5).build().unwrap()
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn valid_grid_builds() {
        let grid = Grid::builder(4, 6)
            .obstacle(c(1, 1))
            .pickup_station(c(0, 0))
            .delivery_station(c(3, 5))
            .build()
            .unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.cell_count(), 24);
        assert!(grid.is_obstacle(c(1, 1)));
        assert!(grid.is_pickup_station(c(0, 0)));
        assert!(grid.is_delivery_station(c(3, 5)));
        assert!(!grid.is_obstacle(c(0, 0)));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::builder(0, 5).build(),
            Err(GridError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Grid::builder(5, 0).build(),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn out_of_bounds_cell_rejected() {
        let result = Grid::builder(3, 3).obstacle(c(3, 0)).build();
        assert!(matches!(result, Err(GridError::OutOfBounds { cell, .. }) if cell == c(3, 0)));
    }

    #[test]
    fn cross_category_conflict_rejected() {
        let result = Grid::builder(3, 3)
            .pickup_station(c(1, 1))
            .delivery_station(c(1, 1))
            .build();
        assert!(matches!(result, Err(GridError::CellConflict(cell)) if cell == c(1, 1)));

        let result = Grid::builder(3, 3)
            .obstacle(c(2, 2))
            .pickup_station(c(2, 2))
            .build();
        assert!(matches!(result, Err(GridError::CellConflict(_))));
    }

    #[test]
    fn same_category_duplicates_tolerated() {
        let grid = Grid::builder(3, 3)
            .obstacle(c(1, 1))
            .obstacle(c(1, 1))
            .build()
            .unwrap();
        assert!(grid.is_obstacle(c(1, 1)));
    }

    #[test]
    fn bounds_query() {
        let grid = open_grid();
        assert!(grid.in_bounds(c(4, 4)));
        assert!(!grid.in_bounds(c(5, 0)));
        assert!(!grid.in_bounds(c(0, 5)));
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn capture_blocks_obstacles_and_vehicles() {
        let grid = Grid::builder(4, 4)
            .obstacle(c(2, 2))
            .pickup_station(c(0, 0))
            .build()
            .unwrap();
        let snapshot = OccupancySnapshot::capture(&grid, [c(1, 1), c(3, 3)]);

        assert!(snapshot.is_blocked(c(2, 2)), "static obstacle");
        assert!(snapshot.is_blocked(c(1, 1)), "vehicle cell");
        assert!(snapshot.is_blocked(c(3, 3)), "vehicle cell");
        // Stations are walkable, not obstacles.
        assert!(!snapshot.is_blocked(c(0, 0)));
        assert!(!snapshot.is_blocked(c(0, 3)));
    }

    #[test]
    fn block_is_additive() {
        let grid = open_grid();
        let mut snapshot = OccupancySnapshot::capture(&grid, []);
        assert!(!snapshot.is_blocked(c(2, 3)));
        snapshot.block(c(2, 3));
        assert!(snapshot.is_blocked(c(2, 3)));
    }

    #[test]
    fn index_roundtrip() {
        let grid = Grid::builder(3, 7).build().unwrap();
        let snapshot = OccupancySnapshot::capture(&grid, []);
        for row in 0..3 {
            for col in 0..7 {
                let cell = c(row, col);
                assert_eq!(snapshot.cell_at(snapshot.index(cell)), cell);
            }
        }
    }
}

#[cfg(test)]
mod planner_tests {
    use super::*;

    fn plan(snapshot: &OccupancySnapshot, start: Cell, goal: Cell) -> Cell {
        AStarPlanner.next_step(snapshot, start, goal)
    }

    #[test]
    fn at_goal_stays_without_search() {
        let snapshot = OccupancySnapshot::capture(&open_grid(), [c(2, 2)]);
        assert_eq!(plan(&snapshot, c(2, 2), c(2, 2)), c(2, 2));
    }

    #[test]
    fn open_grid_first_step_is_deterministic() {
        // Right and down tie on f-cost from (1,1) toward (3,3); the fixed
        // up/right/down/left expansion order makes "right" win.
        let snapshot = OccupancySnapshot::capture(&open_grid(), [c(1, 1)]);
        assert_eq!(plan(&snapshot, c(1, 1), c(3, 3)), c(1, 2));
    }

    #[test]
    fn detours_around_obstacle() {
        let grid = Grid::builder(3, 3).obstacle(c(1, 1)).build().unwrap();
        let snapshot = OccupancySnapshot::capture(&grid, [c(1, 0)]);
        // Straight line (1,0)→(1,2) is walled at (1,1); up and down detours
        // tie at length 4 and "up" is expanded first.
        assert_eq!(plan(&snapshot, c(1, 0), c(1, 2)), c(0, 0));
    }

    #[test]
    fn blocked_goal_waits_in_place() {
        // Another vehicle parked on the goal cell: no path ends there.
        let snapshot = OccupancySnapshot::capture(&open_grid(), [c(0, 0), c(0, 4)]);
        assert_eq!(plan(&snapshot, c(0, 0), c(0, 4)), c(0, 0));
    }

    #[test]
    fn walled_off_goal_waits_in_place() {
        let grid = Grid::builder(1, 3).obstacle(c(0, 1)).build().unwrap();
        let snapshot = OccupancySnapshot::capture(&grid, [c(0, 0)]);
        assert_eq!(plan(&snapshot, c(0, 0), c(0, 2)), c(0, 0));
    }

    #[test]
    fn never_steps_into_blocked_cell() {
        let grid = Grid::builder(5, 5)
            .obstacles([c(2, 2), c(2, 3), c(1, 2)])
            .build()
            .unwrap();
        let occupied = [c(0, 0), c(3, 2), c(4, 4)];
        let snapshot = OccupancySnapshot::capture(&grid, occupied);

        for &start in &occupied {
            for goal_row in 0..5 {
                for goal_col in 0..5 {
                    let goal = c(goal_row, goal_col);
                    let next = plan(&snapshot, start, goal);
                    assert!(
                        next == start || !snapshot.is_blocked(next),
                        "{start} -> {goal} stepped into blocked {next}"
                    );
                    assert!(
                        next == start || next.manhattan(start) == 1,
                        "{start} -> {goal} produced non-adjacent {next}"
                    );
                }
            }
        }
    }

    #[test]
    fn full_walk_reaches_goal_on_shortest_detour() {
        // 5x5 with the center blocked: (0,0) → (4,4) still takes exactly the
        // Manhattan distance of 8 steps.
        let grid = Grid::builder(5, 5).obstacle(c(2, 2)).build().unwrap();
        let mut pos = c(0, 0);
        let goal = c(4, 4);
        let mut steps = 0;
        while pos != goal {
            let snapshot = OccupancySnapshot::capture(&grid, [pos]);
            let next = plan(&snapshot, pos, goal);
            assert_ne!(next, pos, "planner stalled at {pos}");
            assert_ne!(next, c(2, 2), "walked into the obstacle");
            pos = next;
            steps += 1;
            assert!(steps <= 8, "exceeded shortest path length");
        }
        assert_eq!(steps, 8);
    }

    #[test]
    fn repeated_search_is_reproducible() {
        let grid = Grid::builder(6, 6)
            .obstacles([c(1, 1), c(1, 2), c(3, 3), c(4, 1)])
            .build()
            .unwrap();
        let snapshot = OccupancySnapshot::capture(&grid, [c(0, 0), c(5, 5)]);

        let walk = |mut pos: Cell| {
            let mut trail = vec![pos];
            for _ in 0..40 {
                let next = plan(&snapshot, pos, c(5, 4));
                if next == pos {
                    break;
                }
                pos = next;
                trail.push(pos);
            }
            trail
        };
        assert_eq!(walk(c(0, 0)), walk(c(0, 0)));
    }
}
