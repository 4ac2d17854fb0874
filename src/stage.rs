use std::{fmt::Display, ops::Add};

use crate::error::BuildError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Junction,
    HorizontalWall,
    VerticalWall,
    Open,
    Door,
}

impl Tile {
    pub const fn to_char(self) -> char {
        match self {
            Self::Junction => '+',
            Self::HorizontalWall => '-',
            Self::VerticalWall => '|',
            Self::Open => ' ',
            Self::Door => 'o',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Junction),
            '-' => Some(Self::HorizontalWall),
            '|' => Some(Self::VerticalWall),
            ' ' => Some(Self::Open),
            'o' => Some(Self::Door),
            _ => None,
        }
    }

    /// Anything a walker cannot pass through.
    pub const fn is_wall(self) -> bool {
        !matches!(self, Self::Open | Self::Door)
    }
}

/// Maze size in logical cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Result<Self, BuildError> {
        if width < 1 {
            return Err(BuildError::InvalidDimension {
                axis: "width",
                value: i64::from(width),
            });
        }
        if height < 1 {
            return Err(BuildError::InvalidDimension {
                axis: "height",
                value: i64::from(height),
            });
        }
        // Grid positions are indexed with i32 arithmetic.
        let chars = width
            .checked_mul(4)
            .and_then(|w| w.checked_add(1))
            .zip(height.checked_mul(2).and_then(|h| h.checked_add(1)))
            .and_then(|(w, h)| w.checked_mul(h));
        if chars.is_none() {
            return Err(BuildError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn cell_count(self) -> usize {
        (self.width * self.height) as usize
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub const fn index(self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    /// Every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}

/// A position in the character grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector(pub i32, pub i32);
impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1)
    }
}

/// A logical maze cell. Each one owns a 4x2 block of characters and shares
/// its walls and junctions with its neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The interior marker of this cell in the character grid. Always an odd
    /// row and a column of the form 4k+2, which never hold walls.
    pub const fn center(self) -> Vector {
        Vector(x_offset(self.x), y_offset(self.y))
    }

    pub const fn step(self, dir: Direction) -> Self {
        let Vector(dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

pub const fn x_offset(x: i32) -> i32 {
    x * 4 + 2
}

pub const fn y_offset(y: i32) -> i32 {
    y * 2 + 1
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const fn delta(self) -> Vector {
        match self {
            Self::North => Vector(0, -1),
            Self::South => Vector(0, 1),
            Self::West => Vector(-1, 0),
            Self::East => Vector(1, 0),
        }
    }

    /// Offset from a cell center to the wall character on this side.
    pub const fn wall_offset(self) -> Vector {
        match self {
            Self::North => Vector(0, -1),
            Self::South => Vector(0, 1),
            Self::West => Vector(-2, 0),
            Self::East => Vector(2, 0),
        }
    }
}

/// Neighbour enumeration order used throughout generation.
pub static CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

pub struct Stage {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl Stage {
    /// A grid with every wall standing: `+---` blocks on even rows, `|   `
    /// on odd rows, each row closed by a final `+` or `|`.
    pub fn walled(dims: Dimensions) -> Self {
        let width = dims.width * 4 + 1;
        let height = dims.height * 2 + 1;
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let tile = match (y % 2 == 0, x % 4 == 0) {
                    (true, true) => Tile::Junction,
                    (true, false) => Tile::HorizontalWall,
                    (false, true) => Tile::VerticalWall,
                    (false, false) => Tile::Open,
                };
                tiles.push(tile);
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Reads back an ASCII map. Rows must be of equal length, contain only
    /// the five tile characters, and form a `(4w+1)x(2h+1)` grid with
    /// `w, h >= 1`.
    pub fn parse(text: &str) -> Option<Self> {
        let lines = text.lines().collect::<Vec<_>>();
        let width = lines.first()?.chars().count();
        let mut tiles = Vec::with_capacity(width * lines.len());
        for line in &lines {
            if line.chars().count() != width {
                return None;
            }
            for c in line.chars() {
                tiles.push(Tile::from_char(c)?);
            }
        }
        let width = i32::try_from(width).ok()?;
        let height = i32::try_from(lines.len()).ok()?;
        if width < 5 || height < 3 || width % 4 != 1 || height % 2 != 1 {
            return None;
        }
        Dimensions::new((width - 1) / 4, (height - 1) / 2).ok()?;
        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Logical dimensions implied by the character grid.
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: (self.width - 1) / 4,
            height: (self.height - 1) / 2,
        }
    }

    pub fn set(&mut self, pos: Vector, tile: Tile) {
        if !self.contains(pos) {
            return;
        }
        let idx = (pos.1 * self.width + pos.0) as usize;
        self.tiles[idx] = tile;
    }

    pub fn get(&self, pos: Vector) -> Option<Tile> {
        if !self.contains(pos) {
            return None;
        }
        let idx = (pos.1 * self.width + pos.0) as usize;
        self.tiles.get(idx).copied()
    }

    pub const fn contains(&self, pos: Vector) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width as usize)
    }

    /// Whether the wall on `dir` side of `cell` is missing. Doors count as
    /// open.
    pub fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        self.get(cell.center() + dir.wall_offset())
            .is_some_and(|tile| !tile.is_wall())
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}
