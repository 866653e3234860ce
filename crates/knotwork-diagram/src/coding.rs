//! Grid coding of knot diagrams.
//!
//! A diagram is drawn on the integer lattice as a closed walk. The walk is
//! coded as a sequence of [`Direction`]s: each step turns relative to the
//! current heading and then moves one unit. A point visited twice becomes a
//! crossing, provided both passes go straight and perpendicular to each
//! other. [`decode`] replays such a walk into a sparse [`Grid`].
//!
//! # Example
//!
//! ```
//! use knotwork_diagram::coding::{Directions, Point};
//!
//! let square: Directions = "LLLL".parse().unwrap();
//! let grid = square.decode().unwrap();
//! assert_eq!(grid.len(), 4);
//! assert!(grid.get(&Point::new(-1, 1)).is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CrossingViolation, KnotError};

/// Heading of a pass through a grid point.
///
/// The first four values are plain headings. The remaining eight are
/// crossings: the first letter is the heading of the over-pass and the
/// second the heading of the under-pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// East.
    E = 0,
    /// North.
    N = 1,
    /// West.
    W = 2,
    /// South.
    S = 3,
    /// East over north.
    EN = 4,
    /// North over west.
    NW = 5,
    /// West over south.
    WS = 6,
    /// South over east.
    SE = 7,
    /// East over south.
    ES = 8,
    /// North over east.
    NE = 9,
    /// West over north.
    WN = 10,
    /// South over west.
    SW = 11,
}

/// Plain headings in counter-clockwise order.
const HEADINGS: [Orientation; 4] = [Orientation::E, Orientation::N, Orientation::W, Orientation::S];

impl Orientation {
    /// Returns the plain heading this orientation reduces to.
    #[must_use]
    pub fn base(self) -> Self {
        HEADINGS[self as usize % 4]
    }

    /// Returns true if this orientation describes a crossing.
    #[must_use]
    pub fn is_cross(self) -> bool {
        self != self.base()
    }

    /// Returns the heading after taking a step in the given direction.
    ///
    /// Going forward or under keeps the heading unchanged.
    #[must_use]
    pub fn turn(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward | Direction::Under => self,
            Direction::Left => HEADINGS[(self as usize + 1) % 4],
            Direction::Right => HEADINGS[(self as usize + 3) % 4],
        }
    }

    /// Returns true if the two headings are at right angles.
    #[must_use]
    pub fn is_perpendicular(self, other: Self) -> bool {
        (self as u8 + other as u8) % 2 == 1
    }

    /// Combines an earlier pass `self` with a later pass `other`.
    ///
    /// `over` tells whether the later pass goes over the earlier one.
    ///
    /// # Panics
    ///
    /// Panics if the two headings are not perpendicular plain headings.
    #[must_use]
    pub fn cross(self, other: Self, over: bool) -> Self {
        use Orientation::{E, EN, ES, N, NE, NW, S, SE, SW, W, WN, WS};

        let (top, bottom) = if over { (other, self) } else { (self, other) };
        match (top, bottom) {
            (E, N) => EN,
            (N, W) => NW,
            (W, S) => WS,
            (S, E) => SE,
            (E, S) => ES,
            (N, E) => NE,
            (W, N) => WN,
            (S, W) => SW,
            _ => panic!("cannot cross {self} with {other}"),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::N => "N",
            Self::W => "W",
            Self::S => "S",
            Self::EN => "EN",
            Self::NW => "NW",
            Self::WS => "WS",
            Self::SE => "SE",
            Self::ES => "ES",
            Self::NE => "NE",
            Self::WN => "WN",
            Self::SW => "SW",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A step of the walk, relative to the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Go straight; over any pass already at the point.
    Forward = 0,
    /// Turn left.
    Left = 1,
    /// Go straight under a pass already at the point.
    Under = 2,
    /// Turn right.
    Right = 3,
}

impl Direction {
    /// Returns true for the directions that keep the heading.
    #[must_use]
    pub fn is_straight(self) -> bool {
        self as u8 % 2 == 0
    }

    /// Returns the one-letter code of this direction.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Left => 'L',
            Self::Under => 'U',
            Self::Right => 'R',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = KnotError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'F' => Ok(Self::Forward),
            'L' => Ok(Self::Left),
            'U' => Ok(Self::Under),
            'R' => Ok(Self::Right),
            other => Err(KnotError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A lattice point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing eastwards.
    pub x: i32,
    /// Vertical coordinate, growing northwards.
    pub y: i32,
}

impl Point {
    /// The origin, where every walk starts and must end.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring point one unit along the heading.
    #[must_use]
    pub fn step(self, orientation: Orientation) -> Self {
        match orientation.base() {
            Orientation::E => Self::new(self.x + 1, self.y),
            Orientation::N => Self::new(self.x, self.y + 1),
            Orientation::W => Self::new(self.x - 1, self.y),
            _ => Self::new(self.x, self.y - 1),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What the walk does at one grid point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Heading on arrival, or the crossing of both passes.
    pub orientation: Orientation,
    /// Step taken from this point.
    pub direction: Direction,
}

impl Cell {
    /// Creates a cell.
    #[must_use]
    pub const fn new(orientation: Orientation, direction: Direction) -> Self {
        Self {
            orientation,
            direction,
        }
    }

    /// Returns true if this cell holds a crossing.
    #[must_use]
    pub fn is_cross(&self) -> bool {
        self.orientation.is_cross()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.orientation, self.direction)
    }
}

/// Sparse lattice drawing of a knot diagram.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: FxHashMap<Point, Cell>,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a point.
    #[must_use]
    pub fn get(&self, point: &Point) -> Option<&Cell> {
        self.cells.get(point)
    }

    /// Returns the number of occupied points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no point is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of crossing cells.
    #[must_use]
    pub fn crossings(&self) -> usize {
        self.cells.values().filter(|c| c.is_cross()).count()
    }

    /// Iterates over occupied points in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Cell)> {
        self.cells.iter()
    }

    fn insert(&mut self, point: Point, cell: Cell) {
        self.cells.insert(point, cell);
    }
}

impl FromIterator<(Point, Cell)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Point, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// A coded walk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directions(Vec<Direction>);

impl Directions {
    /// Creates a walk from its steps.
    #[must_use]
    pub fn new(steps: Vec<Direction>) -> Self {
        Self(steps)
    }

    /// Returns the steps of the walk.
    #[must_use]
    pub fn as_slice(&self) -> &[Direction] {
        &self.0
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the walk has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replays the walk into a grid. See [`decode`].
    ///
    /// # Errors
    ///
    /// Fails like [`decode`].
    pub fn decode(&self) -> Result<Grid, KnotError> {
        decode(&self.0)
    }
}

impl From<Vec<Direction>> for Directions {
    fn from(steps: Vec<Direction>) -> Self {
        Self(steps)
    }
}

impl FromStr for Directions {
    type Err = KnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Direction::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Replays a walk that starts at the origin heading east.
///
/// Each step records a cell at the current point, turns, and moves one
/// unit. Revisiting a point merges both passes into one crossing cell.
///
/// # Errors
///
/// Returns [`KnotError::IncompleteDirections`] if the walk is empty or does
/// not return to the origin, and [`KnotError::InvalidCrossing`] if a
/// revisited point cannot hold a crossing.
pub fn decode(directions: &[Direction]) -> Result<Grid, KnotError> {
    if directions.is_empty() {
        return Err(KnotError::IncompleteDirections);
    }

    let mut grid = Grid::new();
    let mut point = Point::ORIGIN;
    let mut heading = Orientation::E;

    for &direction in directions {
        let cell = match grid.get(&point) {
            Some(&old) => {
                let reason = if !direction.is_straight() {
                    Some(CrossingViolation::MustGoStraight(direction))
                } else if old.is_cross() {
                    Some(CrossingViolation::AlreadyCrossed(old))
                } else if !old.direction.is_straight() {
                    Some(CrossingViolation::NotStraight(old))
                } else if !old.orientation.is_perpendicular(heading) {
                    Some(CrossingViolation::NotPerpendicular(old, heading))
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(KnotError::InvalidCrossing { point, reason });
                }
                let over = direction == Direction::Forward;
                Cell::new(old.orientation.cross(heading, over), Direction::Forward)
            }
            None if direction == Direction::Under => {
                return Err(KnotError::InvalidCrossing {
                    point,
                    reason: CrossingViolation::NothingToGoUnder,
                });
            }
            None => Cell::new(heading, direction),
        };
        trace!("{point}: {cell}");
        grid.insert(point, cell);

        heading = heading.turn(direction);
        point = point.step(heading);
    }

    if point != Point::ORIGIN {
        return Err(KnotError::IncompleteDirections);
    }
    debug!(
        "decoded {} steps into {} cells, {} crossings",
        directions.len(),
        grid.len(),
        grid.crossings()
    );
    Ok(grid)
}
