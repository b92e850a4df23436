pub mod schema;

use std::collections::HashSet;

use anyhow::{Context, Result};
use schema::Manifest;

use crate::atlas::{self, TextureMap};
use crate::error::TexMapError;

pub fn load_from_yaml_str(s: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(s)?;
    Ok(manifest)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Manifest> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    load_from_yaml_str(&data).with_context(|| format!("parsing manifest {}", path.display()))
}

impl Manifest {
    pub fn validate(&self) -> Result<(), TexMapError> {
        if self.maps.is_empty() {
            return Err(TexMapError::Manifest("no maps listed".into()));
        }
        let mut names = HashSet::new();
        for spec in &self.maps {
            if !names.insert(spec.name.as_str()) {
                return Err(TexMapError::Manifest(format!("duplicate map name '{}'", spec.name)));
            }
            atlas::validate_name(&spec.name)?;
            spec.atlas.validate()?;
        }
        Ok(())
    }

    /// Generates every map, or none if any entry is invalid.
    pub fn generate_all(&self) -> Result<Vec<TextureMap>, TexMapError> {
        self.validate()?;
        self.maps
            .iter()
            .map(|spec| atlas::generate(&spec.name, &spec.atlas, spec.ordering))
            .collect()
    }
}
