//! Cell states and the transition table that guards them.
//!
//! A [`CellState`] is one of three layers:
//!
//! - [`Terrain`]: the base topology the user edits (empty floor, barrier,
//!   start and end markers);
//! - [`Annotation`]: search metadata painted over the floor (open frontier,
//!   closed/explored, final path);
//! - `Unvisited`: the maze generator's working marker.
//!
//! Keeping `Unvisited` apart from `Closed` means "not yet carved" can never be
//! mistaken for "already explored by a search".

use crate::style::Color;

/// Base terrain of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Empty,
    Barrier,
    Start,
    End,
}

/// Search annotation painted over a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Annotation {
    /// Discovered, waiting in the frontier.
    Open,
    /// Fully expanded.
    Closed,
    /// Part of the reconstructed route.
    Path,
}

/// The state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Base(Terrain),
    Search(Annotation),
    /// Not yet reached by maze carving.
    Unvisited,
}

impl Default for CellState {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl CellState {
    pub const EMPTY: Self = Self::Base(Terrain::Empty);
    pub const BARRIER: Self = Self::Base(Terrain::Barrier);
    pub const START: Self = Self::Base(Terrain::Start);
    pub const END: Self = Self::Base(Terrain::End);
    pub const OPEN: Self = Self::Search(Annotation::Open);
    pub const CLOSED: Self = Self::Search(Annotation::Closed);
    pub const PATH: Self = Self::Search(Annotation::Path);
    pub const UNVISITED: Self = Self::Unvisited;

    /// Every state, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::EMPTY,
        Self::BARRIER,
        Self::START,
        Self::END,
        Self::OPEN,
        Self::CLOSED,
        Self::PATH,
        Self::UNVISITED,
    ];

    /// Whether search may step onto a cell in this state.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Base(Terrain::Barrier))
    }

    /// Whether a cell in this state may move to `next`.
    pub const fn can_transition_to(self, next: Self) -> bool {
        use Annotation::*;
        use Terrain::*;

        match self {
            Self::Base(Empty) => true,
            Self::Base(Barrier) => matches!(next, Self::Base(Empty | Barrier)),
            Self::Base(Start) => matches!(next, Self::Base(Empty | Start)),
            Self::Base(End) => matches!(next, Self::Base(Empty | End)),
            Self::Search(Open) => matches!(
                next,
                Self::Search(Closed | Path | Open) | Self::Base(Empty)
            ),
            Self::Search(Closed) => matches!(
                next,
                Self::Search(Path | Closed) | Self::Base(Empty | Barrier)
            ),
            Self::Search(Path) => matches!(next, Self::Search(Path) | Self::Base(Empty)),
            Self::Unvisited => matches!(next, Self::Unvisited | Self::Base(Empty | Barrier)),
        }
    }

    /// Render colour for this state.
    pub const fn color(self) -> Color {
        match self {
            Self::Base(Terrain::Empty) => Color::WHITE,
            Self::Base(Terrain::Barrier) => Color::BLACK,
            Self::Base(Terrain::Start) => Color::ORANGE,
            Self::Base(Terrain::End) => Color::PURPLE,
            Self::Search(Annotation::Open) => Color::GREEN,
            Self::Search(Annotation::Closed) => Color::RED,
            Self::Search(Annotation::Path) => Color::TURQUOISE,
            Self::Unvisited => Color::GREY,
        }
    }

    /// Single-character glyph used by the text rendering of a grid.
    pub const fn glyph(self) -> char {
        match self {
            Self::Base(Terrain::Empty) => '.',
            Self::Base(Terrain::Barrier) => '#',
            Self::Base(Terrain::Start) => 'S',
            Self::Base(Terrain::End) => 'E',
            Self::Search(Annotation::Open) => 'o',
            Self::Search(Annotation::Closed) => 'x',
            Self::Search(Annotation::Path) => '*',
            Self::Unvisited => '?',
        }
    }

    /// The search annotation, if any.
    #[inline]
    pub const fn annotation(self) -> Option<Annotation> {
        match self {
            Self::Search(a) => Some(a),
            _ => None,
        }
    }
}
