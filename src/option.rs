use crate::{error::Result, precondition::check_argument};

const DEFAULT_PATH_DELIMITER: char = '.';

/// Knobs applied when an unbound filter resolves its logical paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub(crate) path_delimiter: char,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            path_delimiter: DEFAULT_PATH_DELIMITER,
        }
    }
}

impl FilterOptions {
    /// Separator used to split logical paths such as `engine.capacity` into segments.
    pub fn path_delimiter(self, path_delimiter: char) -> Self {
        FilterOptions {
            path_delimiter,
            ..self
        }
    }

    /// Returns the configured path separator.
    pub fn delimiter(&self) -> char {
        self.path_delimiter
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_argument(
            !self.path_delimiter.is_whitespace(),
            format!("path delimiter {:?} must not be whitespace", self.path_delimiter),
        )
    }
}
