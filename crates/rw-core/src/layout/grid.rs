//! Fixed-size 2D container with cursor-aware helpers
//!
//! Cells are `Option<T>`; `None` is an unoccupied cell. Every access is
//! bounds-checked and fails with [`BoundsError`] instead of clamping.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Coord, Direction, WalkState};
use crate::EMPTY_CELL_GLYPH;
use crate::error::BoundsError;

/// Width x height grid of optional cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    size: Coord,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Allocate a grid of unoccupied cells. Negative dimensions give an empty grid.
    pub fn new(size: Coord) -> Self {
        let len = size.x.max(0) as usize * size.y.max(0) as usize;
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Self { size, cells }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.x && pos.y < self.size.y
    }

    fn index(&self, pos: Coord) -> Result<usize, BoundsError> {
        if !self.in_bounds(pos) {
            return Err(BoundsError {
                position: pos,
                size: self.size,
            });
        }
        Ok(pos.y as usize * self.size.x as usize + pos.x as usize)
    }

    /// Value at `pos`, `Ok(None)` when the cell is unoccupied
    pub fn get(&self, pos: Coord) -> Result<Option<&T>, BoundsError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx].as_ref())
    }

    pub fn get_mut(&mut self, pos: Coord) -> Result<Option<&mut T>, BoundsError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx].as_mut())
    }

    /// Occupy `pos` with `value`, replacing any previous occupant
    pub fn set(&mut self, pos: Coord, value: T) -> Result<(), BoundsError> {
        let idx = self.index(pos)?;
        self.cells[idx] = Some(value);
        Ok(())
    }

    pub fn is_occupied(&self, pos: Coord) -> Result<bool, BoundsError> {
        self.get(pos).map(|cell| cell.is_some())
    }

    /// Seed the walk at `floor(size / 2)`
    pub fn center_cursor(&self, walk: &mut WalkState) -> Result<Coord, BoundsError> {
        let center = self.size.half();
        self.index(center)?;
        walk.seed(center);
        Ok(center)
    }

    /// Move the walk cursor to `pos`. Returns false when `pos` is the cursor already.
    pub fn move_cursor(&self, walk: &mut WalkState, pos: Coord) -> Result<bool, BoundsError> {
        self.index(pos)?;
        Ok(walk.advance(pos))
    }

    /// Value under the walk cursor
    pub fn cursor_cell(&self, walk: &WalkState) -> Result<Option<&T>, BoundsError> {
        self.get(walk.cursor())
    }

    pub fn set_cursor_cell(&mut self, walk: &WalkState, value: T) -> Result<(), BoundsError> {
        self.set(walk.cursor(), value)
    }

    /// In-bounds cells one step away, in right, left, up, down order
    pub fn neighbor_cells(&self, pos: Coord) -> Result<Vec<Coord>, BoundsError> {
        self.index(pos)?;
        Ok(Direction::ALL
            .iter()
            .map(|dir| pos + dir.step())
            .filter(|&next| self.in_bounds(next))
            .collect())
    }

    /// Occupants of the neighboring cells, in neighbor order
    pub fn neighbors(&self, pos: Coord) -> Result<Vec<&T>, BoundsError> {
        let mut found = Vec::new();
        for next in self.neighbor_cells(pos)? {
            if let Some(value) = self.get(next)? {
                found.push(value);
            }
        }
        Ok(found)
    }

    /// Neighboring cells that are not occupied
    pub fn unoccupied_neighbor_cells(&self, pos: Coord) -> Result<Vec<Coord>, BoundsError> {
        let mut free = Vec::new();
        for next in self.neighbor_cells(pos)? {
            if !self.is_occupied(next)? {
                free.push(next);
            }
        }
        Ok(free)
    }

    /// Every coordinate, row by row from y = 0, x fastest
    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        let Coord { x: w, y: h } = self.size;
        (0..h.max(0)).flat_map(move |y| (0..w.max(0)).map(move |x| Coord::new(x, y)))
    }

    /// Occupied cells with their positions
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter_map(|(pos, cell)| cell.as_ref().map(|value| (pos, value)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Plain-text dump, top row (max y) first, tab-separated columns
    ///
    /// Unoccupied cells print as `0`; occupied cells through `formatter`.
    pub fn visualize<F, S>(&self, formatter: F) -> String
    where
        F: Fn(&T) -> S,
        S: Display,
    {
        let mut out = String::new();
        for y in (0..self.size.y).rev() {
            for x in 0..self.size.x {
                let idx = y as usize * self.size.x as usize + x as usize;
                match &self.cells[idx] {
                    Some(value) => out.push_str(&formatter(value).to_string()),
                    None => out.push_str(EMPTY_CELL_GLYPH),
                }
                out.push('\t');
            }
            out.push('\n');
        }
        out
    }
}

impl<T: Clone> Grid<T> {
    /// Occupy every cell with a clone of `value`
    pub fn fill(&mut self, value: T) {
        for cell in &mut self.cells {
            *cell = Some(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: i32, h: i32) -> Grid<u8> {
        Grid::new(Coord::new(w, h))
    }

    #[test]
    fn test_new_is_empty() {
        let g = grid(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.positions().count(), 12);
    }

    #[test]
    fn test_set_and_get() {
        let mut g = grid(4, 3);
        g.set(Coord::new(3, 2), 7).unwrap();
        assert_eq!(g.get(Coord::new(3, 2)).unwrap(), Some(&7));
        assert_eq!(g.get(Coord::new(0, 0)).unwrap(), None);
        *g.get_mut(Coord::new(3, 2)).unwrap().unwrap() = 9;
        assert_eq!(g.get(Coord::new(3, 2)).unwrap(), Some(&9));
    }

    #[test]
    fn test_out_of_bounds_fails_without_mutation() {
        let mut g = grid(4, 3);
        for bad in [Coord::new(4, 0), Coord::new(0, 3), Coord::new(-1, 0), Coord::new(0, -1)] {
            let err = g.set(bad, 1).unwrap_err();
            assert_eq!(err.position, bad);
            assert_eq!(err.size, Coord::new(4, 3));
            assert!(g.get(bad).is_err());
            assert!(g.neighbor_cells(bad).is_err());
        }
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn test_center_cursor_seeds_history() {
        let g = grid(10, 10);
        let mut walk = WalkState::new();
        assert_eq!(g.center_cursor(&mut walk).unwrap(), Coord::new(5, 5));
        assert_eq!(walk.steps(), &[Coord::new(5, 5)]);
        assert!(walk.relative_steps().is_empty());
    }

    #[test]
    fn test_center_cursor_on_empty_grid_fails() {
        let g = grid(0, 0);
        let mut walk = WalkState::new();
        assert!(g.center_cursor(&mut walk).is_err());
        assert!(walk.steps().is_empty());
    }

    #[test]
    fn test_move_cursor() {
        let g = grid(3, 3);
        let mut walk = WalkState::new();
        g.center_cursor(&mut walk).unwrap();
        assert!(g.move_cursor(&mut walk, Coord::new(2, 1)).unwrap());
        assert!(!g.move_cursor(&mut walk, Coord::new(2, 1)).unwrap());
        assert!(g.move_cursor(&mut walk, Coord::new(3, 1)).is_err());
        assert_eq!(walk.cursor(), Coord::new(2, 1));
        assert_eq!(walk.relative_steps(), &[Coord::new(1, 0)]);
    }

    #[test]
    fn test_cursor_cell() {
        let mut g = grid(3, 3);
        let mut walk = WalkState::new();
        g.center_cursor(&mut walk).unwrap();
        g.set_cursor_cell(&walk, 4).unwrap();
        assert_eq!(g.cursor_cell(&walk).unwrap(), Some(&4));
        assert_eq!(g.get(Coord::new(1, 1)).unwrap(), Some(&4));
    }

    #[test]
    fn test_neighbor_order_and_edges() {
        let g = grid(3, 3);
        assert_eq!(
            g.neighbor_cells(Coord::new(1, 1)).unwrap(),
            vec![Coord::new(2, 1), Coord::new(0, 1), Coord::new(1, 2), Coord::new(1, 0)]
        );
        assert_eq!(
            g.neighbor_cells(Coord::new(0, 0)).unwrap(),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert!(grid(1, 1).neighbor_cells(Coord::ZERO).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_and_unoccupied() {
        let mut g = grid(3, 3);
        g.set(Coord::new(2, 1), 1).unwrap();
        g.set(Coord::new(1, 0), 2).unwrap();
        assert_eq!(g.neighbors(Coord::new(1, 1)).unwrap(), vec![&1, &2]);
        assert_eq!(
            g.unoccupied_neighbor_cells(Coord::new(1, 1)).unwrap(),
            vec![Coord::new(0, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_fill_and_occupied() {
        let mut g = grid(2, 2);
        g.fill(3);
        assert_eq!(g.occupied_count(), 4);
        assert!(g.unoccupied_neighbor_cells(Coord::ZERO).unwrap().is_empty());
        let positions: Vec<_> = g.occupied().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_visualize_top_row_first() {
        let mut g = grid(2, 2);
        g.set(Coord::new(0, 1), 5).unwrap();
        g.set(Coord::new(1, 0), 6).unwrap();
        assert_eq!(g.visualize(|v| v * 10), "50\t0\t\n0\t60\t\n");
    }
}
