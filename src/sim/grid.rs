//! Brick grid
//!
//! Bricks are addressed by (row, column). They are never removed, only
//! flagged destroyed until the next reset.

use serde::{Deserialize, Serialize};

/// A destructible grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub destroyed: bool,
}

/// Fixed-size rows × columns grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            bricks: vec![Brick::default(); rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        self.index(row, column).map(|i| &self.bricks[i])
    }

    pub fn is_destroyed(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(|b| b.destroyed)
    }

    /// Flag a brick destroyed. Returns true only if it was standing.
    pub fn destroy(&mut self, row: usize, column: usize) -> bool {
        match self.index(row, column) {
            Some(i) if !self.bricks[i].destroyed => {
                self.bricks[i].destroyed = true;
                true
            }
            _ => false,
        }
    }

    /// Restore every brick
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.destroyed = false;
        }
    }

    /// Bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.remaining() == 0
    }

    /// Iterate (row, column, brick) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let columns = self.columns;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| (i / columns, i % columns, b))
    }
}
