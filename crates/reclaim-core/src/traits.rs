//! Element construction traits.

/// Construction of an element from a coordinate pair.
///
/// Point-like element types implement this so a pooled array can build
/// them in place from two coordinate values, without the caller first
/// assembling a temporary.
pub trait FromCoords: Sized {
    /// Scalar type of a single coordinate.
    type Coord;

    /// Build an element from its `x` and `y` coordinates.
    fn from_coords(x: Self::Coord, y: Self::Coord) -> Self;
}

impl<C> FromCoords for (C, C) {
    type Coord = C;

    fn from_coords(x: C, y: C) -> Self {
        (x, y)
    }
}

impl<C> FromCoords for [C; 2] {
    type Coord = C;

    fn from_coords(x: C, y: C) -> Self {
        [x, y]
    }
}
