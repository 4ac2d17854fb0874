use log::debug;
use rand::Rng;

use crate::stage::{Cell, Dimensions, Direction, Stage, Tile, Vector, CARDINALS};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Walls knocked down between neighbouring cells.
    pub passages: usize,
    /// Deepest the path stack got.
    pub max_depth: usize,
}

/// Randomised depth-first backtracker over a fully walled stage.
pub struct Maze<'a, R: Rng> {
    dims: Dimensions,
    /// `true` until the walk first enters the cell.
    unvisited: Vec<bool>,
    stage: &'a mut Stage,
    rng: &'a mut R,
}

impl<'a, R: Rng> Maze<'a, R> {
    pub fn new(stage: &'a mut Stage, rng: &'a mut R) -> Self {
        let dims = stage.dimensions();
        Self {
            dims,
            unvisited: vec![true; dims.cell_count()],
            stage,
            rng,
        }
    }

    /// Carves a perfect maze: every cell reachable, no loops.
    pub fn carve(&mut self) -> CarveStats {
        let y = self.rng.gen_range(0..self.dims.height);
        let x = self.rng.gen_range(0..self.dims.width);
        let start = Cell::new(x, y);
        debug!("starting walk at ({x}, {y})");

        let mut stats = CarveStats {
            passages: 0,
            max_depth: 1,
        };
        self.visit(start);
        let mut path = vec![start];
        while let Some(&cell) = path.last() {
            let mut unmade_cells = Vec::new();

            for &dir in &CARDINALS {
                if self.can_carve(cell, dir) {
                    unmade_cells.push(dir);
                }
            }

            if unmade_cells.is_empty() {
                path.pop();
            } else {
                let dir = unmade_cells[self.rng.gen_range(0..unmade_cells.len())];
                let next = cell.step(dir);

                self.open_wall(cell, next);
                self.visit(next);

                path.push(next);
                stats.passages += 1;
                stats.max_depth = stats.max_depth.max(path.len());
            }
        }

        debug_assert!(self.unvisited.iter().all(|&u| !u));
        stats
    }

    fn can_carve(&self, cell: Cell, dir: Direction) -> bool {
        let next = cell.step(dir);
        self.dims.contains(next) && self.unvisited[self.dims.index(next)]
    }

    fn visit(&mut self, cell: Cell) {
        let idx = self.dims.index(cell);
        self.unvisited[idx] = false;
    }

    /// Clears the boundary between two adjacent cells: the three `-` of a
    /// horizontal wall, or the single `|` of a vertical one.
    fn open_wall(&mut self, from: Cell, to: Cell) {
        let a = from.center();
        let b = to.center();
        let between = Vector((a.0 + b.0) / 2, (a.1 + b.1) / 2);
        if a.0 == b.0 {
            for dx in -1..=1 {
                self.stage.set(between + Vector(dx, 0), Tile::Open);
            }
        } else {
            self.stage.set(between, Tile::Open);
        }
    }
}

/// Builds a walled stage of the given size and carves a maze into it.
pub fn generate<R: Rng>(dims: Dimensions, rng: &mut R) -> (Stage, CarveStats) {
    let mut stage = Stage::walled(dims);
    let stats = Maze::new(&mut stage, rng).carve();
    (stage, stats)
}

/// Number of open boundaries between neighbouring cells.
pub fn passage_count(stage: &Stage) -> usize {
    let dims = stage.dimensions();
    dims.cells()
        .map(|cell| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter(|&dir| dims.contains(cell.step(dir)) && stage.is_open(cell, dir))
                .count()
        })
        .sum()
}

/// Number of cells reachable from the top-left cell through open walls.
pub fn reachable_cells(stage: &Stage) -> usize {
    let dims = stage.dimensions();
    let mut seen = vec![false; dims.cell_count()];
    let mut stack = vec![Cell::new(0, 0)];
    seen[0] = true;
    let mut count = 0;
    while let Some(cell) = stack.pop() {
        count += 1;
        for &dir in &CARDINALS {
            let next = cell.step(dir);
            if !dims.contains(next) || !stage.is_open(cell, dir) {
                continue;
            }
            let idx = dims.index(next);
            if !seen[idx] {
                seen[idx] = true;
                stack.push(next);
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn dims(width: i32, height: i32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn single_cell_keeps_every_wall() {
        let mut rng = StdRng::seed_from_u64(1);
        let (stage, stats) = generate(dims(1, 1), &mut rng);
        assert_eq!(stage.to_string(), "+---+\n|   |\n+---+");
        assert_eq!(stats.passages, 0);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn two_cells_side_by_side_share_an_opening() {
        let mut rng = StdRng::seed_from_u64(7);
        let (stage, _) = generate(dims(2, 1), &mut rng);
        assert_eq!(stage.to_string(), "+---+---+\n|       |\n+---+---+");
    }

    #[test]
    fn two_cells_stacked_share_an_opening() {
        let mut rng = StdRng::seed_from_u64(7);
        let (stage, _) = generate(dims(1, 2), &mut rng);
        assert_eq!(stage.to_string(), "+---+\n|   |\n+   +\n|   |\n+---+");
    }

    #[test]
    fn result_is_a_spanning_tree() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = dims(9, 6);
            let (stage, stats) = generate(d, &mut rng);
            assert_eq!(stats.passages, d.cell_count() - 1);
            assert_eq!(passage_count(&stage), d.cell_count() - 1);
            assert_eq!(reachable_cells(&stage), d.cell_count());
            assert!(stats.max_depth <= d.cell_count());
        }
    }

    #[test]
    fn grid_shape_is_preserved() {
        let mut rng = StdRng::seed_from_u64(3);
        let (stage, _) = generate(dims(7, 4), &mut rng);
        let text = stage.to_string();
        let rows = text.split('\n').collect::<Vec<_>>();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.chars().count() == 29));
    }

    #[test]
    fn outer_boundary_stays_intact() {
        let mut rng = StdRng::seed_from_u64(11);
        let (stage, _) = generate(dims(6, 5), &mut rng);
        for x in 0..stage.width {
            assert!(stage.get(Vector(x, 0)).unwrap().is_wall());
            assert!(stage.get(Vector(x, stage.height - 1)).unwrap().is_wall());
        }
        for y in 0..stage.height {
            assert!(stage.get(Vector(0, y)).unwrap().is_wall());
            assert!(stage.get(Vector(stage.width - 1, y)).unwrap().is_wall());
        }
    }

    #[test]
    fn junctions_are_never_carved() {
        let mut rng = StdRng::seed_from_u64(5);
        let (stage, _) = generate(dims(8, 8), &mut rng);
        for y in (0..stage.height).step_by(2) {
            for x in (0..stage.width).step_by(4) {
                assert_eq!(stage.get(Vector(x, y)), Some(Tile::Junction));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(dims(12, 7), &mut StdRng::seed_from_u64(42)).0;
        let b = generate(dims(12, 7), &mut StdRng::seed_from_u64(42)).0;
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn long_corridor_fits_in_path_stack() {
        let mut rng = StdRng::seed_from_u64(9);
        let d = dims(40, 1);
        let (stage, stats) = generate(d, &mut rng);
        assert_eq!(reachable_cells(&stage), 40);
        assert!(stats.max_depth <= 40);
    }
}
