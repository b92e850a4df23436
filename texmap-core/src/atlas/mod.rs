//! Blend-tile texture map generation.
//!
//! A blend block is a 4x4 group of tiles somewhere in the atlas. Every
//! 4-bit neighbor configuration code picks one tile of the block through a
//! fixed permutation; this module turns that choice into normalized UV quads.

pub mod grid;
pub mod ordering;

use std::time::Instant;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::TexMapError;
use grid::{build_grid, GridCell, CELL_COUNT};
use ordering::Ordering;

pub const DEFAULT_NAME: &str = "STONE_TEXTURE_MAP";

/// Decimal digits kept in every emitted coordinate.
pub const PRECISION: i32 = 5;

/// Atlas geometry in pixels. Offsets shift the block inside the atlas and are
/// not bounds-checked; results outside 0..1 are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasParams {
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub offset_x: i64,
    #[serde(default)]
    pub offset_y: i64,
}

impl AtlasParams {
    pub const STONE: AtlasParams = AtlasParams { width: 5, height: 5, offset_x: 0, offset_y: 0 };

    pub fn new(width: i64, height: i64, offset_x: i64, offset_y: i64) -> Self {
        Self { width, height, offset_x, offset_y }
    }

    pub fn validate(&self) -> Result<(), TexMapError> {
        if self.width <= 0 {
            return Err(TexMapError::InvalidArgument(format!("width must be positive, got {}", self.width)));
        }
        if self.height <= 0 {
            return Err(TexMapError::InvalidArgument(format!("height must be positive, got {}", self.height)));
        }
        Ok(())
    }

    fn u(&self, x: u32) -> f64 {
        round_to_precision((x as f64 + self.offset_x as f64) / self.width as f64)
    }

    fn v(&self, y: u32) -> f64 {
        round_to_precision((y as f64 + self.offset_y as f64) / self.height as f64)
    }
}

impl Default for AtlasParams {
    fn default() -> Self { Self::STONE }
}

/// UV quad for one configuration code, corners in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TexCoordCell {
    pub code: u8,
    pub cell: usize,
    pub corners: [DVec2; 4],
}

impl TexCoordCell {
    fn from_grid(code: u8, cell: usize, g: &GridCell, params: &AtlasParams) -> Self {
        let (x1, x2) = (params.u(g.start_x), params.u(g.end_x));
        let (y1, y2) = (params.v(g.start_y), params.v(g.end_y));
        Self {
            code,
            cell,
            corners: [
                DVec2::new(x1, y1),
                DVec2::new(x2, y1),
                DVec2::new(x2, y2),
                DVec2::new(x1, y2),
            ],
        }
    }

    pub fn min(&self) -> DVec2 { self.corners[0] }
    pub fn max(&self) -> DVec2 { self.corners[2] }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureMap {
    pub name: String,
    pub cells: Vec<TexCoordCell>,
}

/// Rounds half away from zero to [`PRECISION`] digits; never returns `-0.0`.
pub fn round_to_precision(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    let r = (value * scale).round() / scale;
    if r == 0.0 { 0.0 } else { r }
}

/// Table names are pasted verbatim into C++ source.
pub fn validate_name(name: &str) -> Result<(), TexMapError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(TexMapError::InvalidArgument("name must not be empty".into()));
    };
    let ident_ok = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !ident_ok {
        return Err(TexMapError::InvalidArgument(format!("name '{}' is not a valid identifier", name)));
    }
    Ok(())
}

pub fn generate(name: &str, params: &AtlasParams, ordering: Ordering) -> Result<TextureMap, TexMapError> {
    validate_name(name)?;
    params.validate()?;
    let table = ordering.table();
    ordering::validate_permutation(table)?;

    let start = Instant::now();
    let grid = build_grid();
    let cells: Vec<TexCoordCell> = table
        .iter()
        .enumerate()
        .map(|(code, &cell)| {
            let tc = TexCoordCell::from_grid(code as u8, cell, &grid[cell], params);
            log::trace!("{} code {:#06b} -> cell {} {:?}", name, code, cell, tc.corners);
            tc
        })
        .collect();
    debug_assert_eq!(cells.len(), CELL_COUNT);
    log::debug!(
        "generated {} ({}x{}+{}+{}, {} ordering) in {:?}",
        name, params.width, params.height, params.offset_x, params.offset_y, ordering, start.elapsed()
    );
    Ok(TextureMap { name: name.to_string(), cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(tc: &TexCoordCell) -> [[f64; 2]; 4] {
        tc.corners.map(|c| [c.x, c.y])
    }

    #[test]
    fn stone_first_and_last_codes() {
        let map = generate(DEFAULT_NAME, &AtlasParams::STONE, Ordering::Standard).unwrap();
        assert_eq!(map.cells.len(), 16);

        let first = &map.cells[0];
        assert_eq!(first.cell, 0);
        assert_eq!(quad(first), [[0.0, 0.0], [0.2, 0.0], [0.2, 0.2], [0.0, 0.2]]);

        let last = &map.cells[15];
        assert_eq!(last.code, 15);
        assert_eq!(last.cell, 3);
        assert_eq!(quad(last), [[0.6, 0.0], [0.8, 0.0], [0.8, 0.2], [0.6, 0.2]]);
    }

    #[test]
    fn codes_follow_slot_order() {
        let map = generate("T", &AtlasParams::STONE, Ordering::Hilbert).unwrap();
        for (k, tc) in map.cells.iter().enumerate() {
            assert_eq!(tc.code as usize, k);
            assert_eq!(tc.cell, ordering::HILBERT[k]);
        }
    }

    #[test]
    fn rounding_to_five_digits() {
        assert_eq!(round_to_precision(1.0 / 3.0), 0.33333);
        assert_eq!(round_to_precision(2.0 / 3.0), 0.66667);
        assert_eq!(round_to_precision(-0.000001), 0.0);
        assert!(round_to_precision(-0.000001).is_sign_positive());

        let map = generate("T", &AtlasParams::new(3, 7, 0, 0), Ordering::Standard).unwrap();
        // cell 10 is (2, 2)
        assert_eq!(quad(&map.cells[1]), [[0.66667, 0.28571], [1.0, 0.28571], [1.0, 0.42857], [0.66667, 0.42857]]);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3)] {
            let err = generate("T", &AtlasParams::new(w, h, 0, 0), Ordering::Standard).unwrap_err();
            assert!(matches!(err, TexMapError::InvalidArgument(_)), "{:?}", err);
        }
    }

    #[test]
    fn negative_offsets_are_accepted() {
        let map = generate("T", &AtlasParams::new(5, 5, -5, -10), Ordering::Standard).unwrap();
        assert_eq!(quad(&map.cells[0]), [[-1.0, -2.0], [-0.8, -2.0], [-0.8, -1.8], [-1.0, -1.8]]);
    }

    #[test]
    fn names_must_be_identifiers() {
        assert!(validate_name("STONE_TEXTURE_MAP").is_ok());
        assert!(validate_name("_grass2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("2GRASS").is_err());
        assert!(validate_name("GRASS MAP").is_err());
        assert!(validate_name("GRASS{").is_err());
    }
}
