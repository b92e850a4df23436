//! Tile grid layout inside the atlas.

/// Tiles per side of the blend-tile block.
pub const GRID_SIZE: u32 = 4;

/// Number of tiles in the block, one per 4-bit configuration code.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// One tile of the block, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl GridCell {
    pub fn at(i: u32, j: u32) -> Self {
        Self { start_x: i, start_y: j, end_x: i + 1, end_y: j + 1 }
    }
}

// Row-major, x fastest: cell index = j * GRID_SIZE + i.
pub fn build_grid() -> [GridCell; CELL_COUNT] {
    std::array::from_fn(|idx| {
        let idx = idx as u32;
        GridCell::at(idx % GRID_SIZE, idx / GRID_SIZE)
    })
}
