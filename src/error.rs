use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum BuildError {
    /// Width or height below one.
    InvalidDimension { axis: &'static str, value: i64 },
    /// Valid sizes whose character grid does not fit in `i32` positions.
    TooLarge { width: i32, height: i32 },
    /// Map directory name that is empty or would leave the maps root.
    InvalidDirectory(String),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(f, "{axis} must be a positive integer, got {value}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "a {width}x{height} map is too large to build")
            }
            Self::InvalidDirectory(name) => {
                write!(f, "invalid map directory name {name:?}")
            }
            Self::Io { path, source } => {
                write!(f, "failed to write map to {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
