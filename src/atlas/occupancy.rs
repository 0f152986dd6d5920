use ndshape::{RuntimeShape, Shape};

/// Square grid of texels marking which ones are already taken.
///
/// Stored as a single row-major `Vec<bool>` so that one allocation can be
/// reused across packing attempts of different sizes.
pub struct OccupancyGrid {
    shape: RuntimeShape<u32, 2>,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(size: u32) -> Self {
        let mut grid = Self {
            shape: RuntimeShape::<u32, 2>::new([0, 0]),
            cells: Vec::new(),
        };
        grid.reset(size);
        grid
    }

    /// Clears the grid and resizes it to `size x size`.
    pub fn reset(&mut self, size: u32) {
        self.shape = RuntimeShape::<u32, 2>::new([size, size]);
        self.cells.clear();
        self.cells.resize(self.shape.size() as usize, false);
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.shape.as_array()[0]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        self.shape.linearize([x, y]) as usize
    }

    /// Whether the `width x height` rectangle at `(x, y)` is inside the grid
    /// and entirely free.
    pub fn is_free(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let size = self.size();
        if x + width > size || y + height > size {
            return false;
        }
        (y..y + height).all(|row| {
            let start = self.index(x, row);
            self.cells[start..start + width as usize].iter().all(|taken| !taken)
        })
    }

    /// Marks the `width x height` rectangle at `(x, y)` as taken. The rectangle
    /// must fit inside the grid.
    pub fn fill(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for row in y..y + height {
            let start = self.index(x, row);
            self.cells[start..start + width as usize].fill(true);
        }
    }

    /// First free position for a `width x height` rectangle, scanning rows
    /// top to bottom and each row left to right.
    pub fn first_fit(&self, width: u32, height: u32) -> Option<[u32; 2]> {
        let size = self.size();
        let max_x = size.checked_sub(width)?;
        let max_y = size.checked_sub(height)?;
        (0..=max_y)
            .flat_map(|y| (0..=max_x).map(move |x| [x, y]))
            .find(|&[x, y]| self.is_free(x, y, width, height))
    }

    pub fn num_taken(&self) -> usize {
        self.cells.iter().filter(|taken| **taken).count()
    }
}
