//! Bounded 2D grid used for the town tile map.

use serde::Serialize;

/// A 2D tilemap grid in row-major order. Does not wrap at the edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> Tilemap<T> {
    /// Build a map by calling `f(col, row)` for every cell in row-major order.
    ///
    /// Cells are produced strictly top-to-bottom, left-to-right, so callers
    /// threading a random stream through `f` get a reproducible layout.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }
        Self { width, height, data }
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    /// True if the signed coordinate lies on the grid.
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    pub fn get(&self, col: usize, row: usize) -> &T {
        &self.data[self.index(col, row)]
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut T {
        let idx = self.index(col, row);
        &mut self.data[idx]
    }

    pub fn set(&mut self, col: usize, row: usize, value: T) {
        let idx = self.index(col, row);
        self.data[idx] = value;
    }

    /// Lookup with signed coordinates; `None` off the grid.
    pub fn get_checked(&self, col: i32, row: i32) -> Option<&T> {
        if self.in_bounds(col, row) {
            Some(self.get(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Mutable lookup with signed coordinates; `None` off the grid.
    pub fn get_checked_mut(&mut self, col: i32, row: i32) -> Option<&mut T> {
        if self.in_bounds(col, row) {
            Some(self.get_mut(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Distance from a cell to the nearest grid edge, in tiles.
    pub fn edge_distance(&self, col: usize, row: usize) -> usize {
        col.min(row)
            .min(self.width - 1 - col)
            .min(self.height - 1 - row)
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let col = idx % self.width;
            let row = idx / self.width;
            (col, row, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let col = idx % width;
            let row = idx / width;
            (col, row, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let map = Tilemap::from_fn(3, 2, |col, row| row * 10 + col);
        assert_eq!(*map.get(2, 0), 2);
        assert_eq!(*map.get(0, 1), 10);
        let order: Vec<_> = map.iter().map(|(_, _, v)| *v).collect();
        assert_eq!(order, vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_checked_access_rejects_off_grid() {
        let mut map = Tilemap::new_with(4, 4, 0u8);
        assert!(map.get_checked(-1, 0).is_none());
        assert!(map.get_checked(0, 4).is_none());
        assert!(map.get_checked_mut(4, 0).is_none());
        *map.get_checked_mut(3, 3).unwrap() = 9;
        assert_eq!(*map.get(3, 3), 9);
    }

    #[test]
    fn test_edge_distance() {
        let map: Tilemap<u8> = Tilemap::new(80, 80);
        assert_eq!(map.edge_distance(0, 40), 0);
        assert_eq!(map.edge_distance(79, 40), 0);
        assert_eq!(map.edge_distance(3, 50), 3);
        assert_eq!(map.edge_distance(40, 40), 39);
    }
}
