//! Grid data model: panels laid out in ragged, row-major rows.

use serde::{Deserialize, Serialize};

/// A single grid cell holding (possibly multi-line) text.
///
/// Serialized as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Panel {
    content: String,
}

impl Panel {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Splits the content into visual lines.
    ///
    /// Splits on `'\n'` only, so a trailing newline yields a trailing empty
    /// line and empty content yields exactly one empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Number of visual lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

impl From<&str> for Panel {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Panel {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// Row-major collection of panels. Rows may have different lengths.
///
/// Serialized as an array of arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Panel>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from rows of anything string-like.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<Panel>,
    {
        rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<_>>())
            .collect()
    }

    pub fn rows(&self) -> &[Vec<Panel>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

}

impl From<Vec<Vec<Panel>>> for Grid {
    fn from(rows: Vec<Vec<Panel>>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Vec<Panel>> for Grid {
    fn from_iter<T: IntoIterator<Item = Vec<Panel>>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
