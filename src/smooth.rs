//! Box-drawing pass: turns the ASCII walls of a finished stage into Unicode
//! line glyphs. The result is a [`GlyphMap`], which has no walls left to
//! smooth, so the pass only ever runs once per map.

use std::fmt::Display;

use crate::stage::{Stage, Tile, Vector};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Links {
    north: bool,
    south: bool,
    west: bool,
    east: bool,
}

impl Links {
    fn around(stage: &Stage, pos: Vector) -> Self {
        let linked = |offset: Vector| {
            stage
                .get(pos + offset)
                .is_some_and(|tile| tile != Tile::Open)
        };
        Self {
            north: linked(Vector(0, -1)),
            south: linked(Vector(0, 1)),
            west: linked(Vector(-1, 0)),
            east: linked(Vector(1, 0)),
        }
    }
}

const fn junction_glyph(links: Links) -> char {
    let Links {
        north,
        south,
        west,
        east,
    } = links;
    match (north, south, west, east) {
        (true, true, true, true) => '┼',
        (true, true, true, false) => '┤',
        (true, true, false, true) => '├',
        (true, false, true, true) => '┴',
        (false, true, true, true) => '┬',
        (true, true, false, false) => '│',
        (false, false, true, true) => '─',
        (true, false, false, true) => '╰',
        (true, false, true, false) => '╯',
        (false, true, false, true) => '╭',
        (false, true, true, false) => '╮',
        (false, false, false, true) => '╶',
        (false, false, true, false) => '╴',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
        // Cannot occur in a carved maze.
        (false, false, false, false) => '+',
    }
}

/// A smoothed map, one `char` per grid position.
pub struct GlyphMap {
    pub width: usize,
    pub height: usize,
    glyphs: Vec<char>,
}

impl GlyphMap {
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs.get(y * self.width + x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.width)
    }
}

impl Display for GlyphMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Every neighbour lookup reads the untouched `stage`, so the outcome does
/// not depend on scan order.
pub fn smooth(stage: &Stage) -> GlyphMap {
    let mut glyphs = Vec::with_capacity(stage.tiles.len());
    for y in 0..stage.height {
        for x in 0..stage.width {
            let pos = Vector(x, y);
            let glyph = match stage.get(pos) {
                Some(Tile::HorizontalWall) => '─',
                Some(Tile::VerticalWall) => '│',
                Some(Tile::Junction) => junction_glyph(Links::around(stage, pos)),
                Some(tile) => tile.to_char(),
                None => ' ',
            };
            glyphs.push(glyph);
        }
    }
    GlyphMap {
        width: stage.width as usize,
        height: stage.height as usize,
        glyphs,
    }
}
