use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use log::info;

use crate::{builder::MapArt, error::BuildError};

pub const MAP_FILE: &str = "map.art";
pub const DEFAULT_MAPS_ROOT: &str = "../public/art/maps";

/// Resolves `<root>/<name>`. The name may nest (`caves/level-1`) but must
/// stay below `root`.
pub fn map_dir(root: &Path, name: &str) -> Result<PathBuf, BuildError> {
    let rel = Path::new(name);
    let stays_inside = rel
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if name.is_empty() || !stays_inside {
        return Err(BuildError::InvalidDirectory(name.to_owned()));
    }
    Ok(root.join(rel))
}

/// Writes the map as `map.art` inside `dir`, creating the directory chain
/// first. Returns the file path.
pub fn write_map(dir: &Path, art: &MapArt) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(dir).map_err(|source| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(MAP_FILE);
    fs::write(&path, art.to_string()).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;
    info!(" - wrote map data to {}", path.display());
    Ok(path)
}
