//! `KEY=VALUE` constants files and the demo [`Settings`] read from them.
//!
//! ```text
//! WIDTH=800
//! ROWS=50
//! BARRIER=0,0,0
//! ```
//!
//! Blank lines and lines without `=` are skipped. A value containing a comma
//! is an RGB triple, anything else an integer.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use gridpath_core::Color;
use gridpath_paths::Algorithm;

/// Default board width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default side length of the grid.
pub const DEFAULT_ROWS: i32 = 50;

/// A single parsed constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Rgb(Color),
}

/// Parsed constants, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constants {
    values: BTreeMap<String, Value>,
}

impl Constants {
    /// Parse constants from text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut values = BTreeMap::new();
        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || !line.contains('=') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| ConfigError::Malformed {
                    line: line_no,
                    content: raw.to_owned(),
                })?;
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.contains('=') {
                return Err(ConfigError::Malformed {
                    line: line_no,
                    content: raw.to_owned(),
                });
            }
            let parsed = if value.contains(',') {
                Value::Rgb(parse_rgb(key, value, line_no)?)
            } else {
                Value::Int(value.parse().map_err(|_| ConfigError::BadInt {
                    key: key.to_owned(),
                    value: value.to_owned(),
                    line: line_no,
                })?)
            };
            values.insert(key.to_owned(), parsed);
        }
        Ok(Self { values })
    }

    /// Read and parse a constants file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded constants from {}", path.display());
        Self::parse(&text)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).copied()
    }

    /// Integer constant, `Ok(None)` when absent.
    pub fn int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Int(v)) => Ok(Some(v)),
            Some(Value::Rgb(_)) => Err(ConfigError::Invalid {
                key: key.to_owned(),
                reason: "expected an integer, found a colour".into(),
            }),
        }
    }

    /// Colour constant, `Ok(None)` when absent.
    pub fn color(&self, key: &str) -> Result<Option<Color>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Rgb(c)) => Ok(Some(c)),
            Some(Value::Int(_)) => Err(ConfigError::Invalid {
                key: key.to_owned(),
                reason: "expected an r,g,b colour, found an integer".into(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_rgb(key: &str, value: &str, line: usize) -> Result<Color, ConfigError> {
    let bad = || ConfigError::BadColor {
        key: key.to_owned(),
        value: value.to_owned(),
        line,
    };
    let parts: Vec<u8> = value
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| bad())?;
    match parts.as_slice() {
        &[r, g, b] => Ok(Color::from_rgb(r, g, b)),
        _ => Err(bad()),
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Demo settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Board width in pixels.
    pub width: u32,
    /// Grid side length.
    pub rows: i32,
    /// Maze seed; `None` draws from entropy.
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            rows: DEFAULT_ROWS,
            seed: None,
            algorithm: Algorithm::AStar,
        }
    }
}

impl Settings {
    /// Settings from `WIDTH`, `ROWS`, `SEED` and `ALGORITHM` (1 = A*,
    /// 2 = Dijkstra). Missing keys keep their defaults.
    pub fn from_constants(c: &Constants) -> Result<Self, ConfigError> {
        let mut s = Self::default();
        if let Some(w) = c.int("WIDTH")? {
            s.width = positive("WIDTH", w)?;
        }
        if let Some(r) = c.int("ROWS")? {
            s.rows = positive("ROWS", r)?;
        }
        if let Some(seed) = c.int("SEED")? {
            s.seed = Some(u64::try_from(seed).map_err(|_| ConfigError::Invalid {
                key: "SEED".into(),
                reason: format!("{seed} is negative"),
            })?);
        }
        if let Some(a) = c.int("ALGORITHM")? {
            s.algorithm = match a {
                1 => Algorithm::AStar,
                2 => Algorithm::Dijkstra,
                other => {
                    return Err(ConfigError::Invalid {
                        key: "ALGORITHM".into(),
                        reason: format!("{other} is not 1 (A*) or 2 (Dijkstra)"),
                    });
                }
            };
        }
        if s.gap() == 0 {
            return Err(ConfigError::Invalid {
                key: "WIDTH".into(),
                reason: format!("{} px cannot fit {} rows", s.width, s.rows),
            });
        }
        Ok(s)
    }

    /// Pixel side of one cell.
    pub fn gap(&self) -> u32 {
        self.width / self.rows.max(1) as u32
    }
}

fn positive<T: TryFrom<i64>>(key: &str, v: i64) -> Result<T, ConfigError> {
    if v <= 0 {
        return Err(ConfigError::Invalid {
            key: key.to_owned(),
            reason: format!("{v} must be positive"),
        });
    }
    T::try_from(v).map_err(|_| ConfigError::Invalid {
        key: key.to_owned(),
        reason: format!("{v} is out of range"),
    })
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading constants or deriving settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line with `=` that is not `KEY=VALUE`.
    Malformed { line: usize, content: String },
    /// An integer value that does not parse.
    BadInt {
        key: String,
        value: String,
        line: usize,
    },
    /// A comma-separated value that is not three 0-255 components.
    BadColor {
        key: String,
        value: String,
        line: usize,
    },
    /// A well-formed value outside its allowed range.
    Invalid { key: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Malformed { line, content } => {
                write!(f, "line {line}: expected KEY=VALUE, got \u{201c}{content}\u{201d}")
            }
            Self::BadInt { key, value, line } => {
                write!(f, "line {line}: {key}: \u{201c}{value}\u{201d} is not an integer")
            }
            Self::BadColor { key, value, line } => {
                write!(f, "line {line}: {key}: \u{201c}{value}\u{201d} is not an r,g,b colour")
            }
            Self::Invalid { key, reason } => write!(f, "{key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
