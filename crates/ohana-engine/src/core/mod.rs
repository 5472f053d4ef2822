//! Board, piece and shape data model with the collision and placement rules.

pub use self::{board::*, piece::*, shape::*};

pub(crate) mod board;
pub(crate) mod piece;
pub(crate) mod shape;
