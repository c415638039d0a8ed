//! City blocks and street addresses.
//!
//! An address is `(block, face, number)`.  The face picks one side of the
//! block's rectangle and `number` is the offset along it:
//!
//! | Face      | Letter | Position              |
//! |-----------|--------|-----------------------|
//! | North     | `N`    | `(x + number, y + h)` |
//! | South     | `S`    | `(x + number, y)`     |
//! | East      | `L`    | `(x, y + number)`     |
//! | West      | `O`    | `(x + w, y + number)` |
//!
//! `E` and `W` are accepted as aliases of `L` and `O`.

use std::fmt;

use cg_core::{BoundingBox, Point};

use crate::QueryError;

/// Side of a block an address sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    North,
    South,
    East,
    West,
}

impl TryFrom<char> for Face {
    type Error = QueryError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Face::North),
            'S' => Ok(Face::South),
            'L' | 'E' => Ok(Face::East),
            'O' | 'W' => Ok(Face::West),
            other => Err(QueryError::InvalidFace(other)),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Face::North => 'N',
            Face::South => 'S',
            Face::East => 'L',
            Face::West => 'O',
        };
        write!(f, "{c}")
    }
}

/// A named rectangular block.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub name: String,
    pub rect: BoundingBox,
}

impl Block {
    pub fn new(name: impl Into<String>, rect: BoundingBox) -> Self {
        Self { name: name.into(), rect }
    }

    /// Position of address `number` on `face`.
    pub fn address(&self, face: Face, number: f64) -> Point {
        let BoundingBox { x, y, w, h } = self.rect;
        match face {
            Face::North => Point::new(x + number, y + h),
            Face::South => Point::new(x + number, y),
            Face::East => Point::new(x, y + number),
            Face::West => Point::new(x + w, y + number),
        }
    }
}
