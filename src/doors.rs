//! Marks dead ends that open only to the north or only to the south with a
//! door (`-o-`) across their single opening.

use log::debug;

use crate::stage::{Cell, Direction, Stage, Tile, Vector, CARDINALS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoorSide {
    North,
    South,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Door {
    pub cell: Cell,
    pub side: DoorSide,
}

/// Runs over every cell once, row by row. A door placed earlier in the scan
/// counts as an opening for the cells after it, so the far end of a two-cell
/// dead end reuses the door already standing in its opening.
pub fn add_doors(stage: &mut Stage) -> Vec<Door> {
    let dims = stage.dimensions();
    let mut doors = Vec::new();
    for cell in dims.cells() {
        if let Some(side) = dead_end_side(stage, cell) {
            if stage.get(opening(cell, side)) == Some(Tile::Door) {
                continue;
            }
            place_door(stage, cell, side);
            debug!("door {side:?} of ({}, {})", cell.x, cell.y);
            doors.push(Door { cell, side });
        }
    }
    doors
}

/// The side a door belongs on, if `cell` is a dead end open only to the
/// north or only to the south.
pub fn dead_end_side(stage: &Stage, cell: Cell) -> Option<DoorSide> {
    if stage.get(cell.center()) != Some(Tile::Open) {
        return None;
    }

    let walled = CARDINALS
        .iter()
        .filter(|&&dir| !stage.is_open(cell, dir))
        .copied()
        .collect::<Vec<_>>();
    if walled.len() != 3 {
        return None;
    }

    let north = walled.contains(&Direction::North);
    let south = walled.contains(&Direction::South);
    match (north, south) {
        (true, false) => Some(DoorSide::South),
        (false, true) => Some(DoorSide::North),
        _ => None,
    }
}

fn opening(cell: Cell, side: DoorSide) -> Vector {
    let dir = match side {
        DoorSide::North => Direction::North,
        DoorSide::South => Direction::South,
    };
    cell.center() + dir.wall_offset()
}

fn place_door(stage: &mut Stage, cell: Cell, side: DoorSide) {
    let row = opening(cell, side);
    stage.set(row + Vector(-1, 0), Tile::HorizontalWall);
    stage.set(row, Tile::Door);
    stage.set(row + Vector(1, 0), Tile::HorizontalWall);
}
