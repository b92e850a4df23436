pub mod atlas;
pub mod error;
pub mod export;
pub mod manifest;

pub use atlas::{generate, ordering::Ordering, AtlasParams, TexCoordCell, TextureMap, DEFAULT_NAME};
pub use error::TexMapError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renders the C++ table for one map with the standard ordering.
pub fn generate_text(
    name: &str,
    width: i64,
    height: i64,
    offset_x: i64,
    offset_y: i64,
) -> Result<String, TexMapError> {
    let params = AtlasParams::new(width, height, offset_x, offset_y);
    let map = generate(name, &params, Ordering::Standard)?;
    Ok(export::cpp::render(&map, export::cpp::CppOptions::default()))
}
