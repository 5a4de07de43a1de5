/// A rectangular 2D tile grid with hard bounds (no edge wrapping).
///
/// Row-major storage indexed by (x, y). The map never resizes after
/// construction; generators mutate cells in place.
#[derive(Clone, PartialEq)]
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

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Fill the entire map with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}

impl<T: Clone + PartialEq> Tilemap<T> {
    /// Count cells holding a given value.
    pub fn count(&self, value: &T) -> usize {
        self.data.iter().filter(|v| *v == value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut map = Tilemap::new_with(4, 3, 0u8);
        map.set(3, 2, 7);
        assert_eq!(*map.get(3, 2), 7);
        assert_eq!(*map.get(0, 0), 0);
    }

    #[test]
    fn test_bounds_are_hard() {
        let map = Tilemap::new_with(10, 5, 0u8);
        assert!(map.in_bounds(0, 0));
        assert!(map.in_bounds(9, 4));
        assert!(!map.in_bounds(10, 0));
        assert!(!map.in_bounds(0, 5));
        assert!(!map.in_bounds(-1, 2));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut map = Tilemap::new_with(3, 2, 0usize);
        for (x, y, v) in map.iter_mut() {
            *v = y * 10 + x;
        }
        for (x, y, v) in map.iter() {
            assert_eq!(*v, y * 10 + x);
        }
    }

    #[test]
    fn test_count() {
        let mut map = Tilemap::new_with(4, 4, 0u8);
        map.set(1, 1, 9);
        map.set(2, 3, 9);
        assert_eq!(map.count(&9), 2);
        assert_eq!(map.count(&0), 14);
    }
}
