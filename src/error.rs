use std::fmt;

/// Shape of a value that failed a size check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Frame { width: usize, height: usize },
    Levels(usize),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame { width, height } => write!(f, "{width}x{height} frame"),
            Self::Levels(count) => write!(f, "{count} pyramid levels"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Parameters rejected before any frame was processed.
    InvalidConfiguration(String),
    /// A frame or pyramid does not match the shape established for the stream.
    DimensionMismatch { expected: Extent, actual: Extent },
    /// A level index past the last pyramid level.
    LevelOutOfRange { level: usize, levels: usize },
    EmptyFrame,
}

impl Error {
    pub(crate) fn frame_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: Extent::Frame {
                width: expected.0,
                height: expected.1,
            },
            actual: Extent::Frame {
                width: actual.0,
                height: actual.1,
            },
        }
    }

    pub(crate) fn level_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: Extent::Levels(expected),
            actual: Extent::Levels(actual),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::LevelOutOfRange { level, levels } => {
                write!(f, "level {level} out of range for {levels} pyramid levels")
            }
            Self::EmptyFrame => write!(f, "frame has zero width or height"),
        }
    }
}

impl std::error::Error for Error {}
