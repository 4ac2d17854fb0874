use std::fmt::Display;

use log::{debug, info, log_enabled, Level};
use rand::Rng;

use crate::{
    doors,
    error::BuildError,
    maze::{self, CarveStats},
    smooth::{self, GlyphMap},
    stage::{Dimensions, Stage},
};

/// A finished map, ready to be written out.
pub enum MapArt {
    Ascii(Stage),
    Smoothed(GlyphMap),
}

impl Display for MapArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii(stage) => stage.fmt(f),
            Self::Smoothed(map) => map.fmt(f),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub carve: CarveStats,
    pub doors: usize,
}

pub struct MapBuilder {
    dims: Dimensions,
    smooth: bool,
}

impl MapBuilder {
    pub fn new(width: i32, height: i32) -> Result<Self, BuildError> {
        Ok(Self {
            dims: Dimensions::new(width, height)?,
            smooth: false,
        })
    }

    #[must_use]
    pub const fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Carve, add doors, then optionally smooth.
    pub fn build<R: Rng>(&self, rng: &mut R) -> (MapArt, BuildReport) {
        info!(
            "--- building map ({}x{}) ---",
            self.dims.width, self.dims.height
        );

        let (mut stage, carve) = maze::generate(self.dims, rng);
        info!(" - created base map");
        debug!(
            "carved {} passages, path stack peaked at {}",
            carve.passages, carve.max_depth
        );

        let doors = doors::add_doors(&mut stage).len();
        info!(" - added {doors} doors");
        if log_enabled!(Level::Debug) {
            debug!(
                "{} passages open, {} of {} cells reachable",
                maze::passage_count(&stage),
                maze::reachable_cells(&stage),
                self.dims.cell_count()
            );
        }

        let art = if self.smooth {
            let map = smooth::smooth(&stage);
            info!(" - smoothed map appearance with Unicode characters");
            MapArt::Smoothed(map)
        } else {
            MapArt::Ascii(stage)
        };

        (art, BuildReport { carve, doors })
    }
}
