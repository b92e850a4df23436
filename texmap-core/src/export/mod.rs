//! Export utilities (C++ initializers, JSON metadata).

pub mod cpp;

use anyhow::Result;

use crate::atlas::TextureMap;

pub fn to_json(map: &TextureMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

pub fn to_json_all(maps: &[TextureMap]) -> Result<String> {
    Ok(serde_json::to_string_pretty(maps)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{generate, ordering::Ordering, AtlasParams};

    #[test]
    fn json_shape() {
        let map = generate("GRASS", &AtlasParams::STONE, Ordering::Standard).unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&map).unwrap()).unwrap();
        assert_eq!(v["name"], "GRASS");
        let cells = v["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[15]["code"], 15);
        assert_eq!(cells[15]["cell"], 3);
        assert_eq!(cells[15]["corners"][0], serde_json::json!([0.6, 0.0]));
        assert_eq!(cells[15]["corners"][2], serde_json::json!([0.8, 0.2]));
    }

    #[test]
    fn json_reads_back() {
        let map = generate("GRASS", &AtlasParams::new(10, 20, 5, 0), Ordering::Hilbert).unwrap();
        let back: TextureMap = serde_json::from_str(&to_json(&map).unwrap()).unwrap();
        assert_eq!(back, map);
    }
}
