use serde::{Deserialize, Serialize};

use crate::atlas::{ordering::Ordering, AtlasParams};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub maps: Vec<MapSpec>,
}

/// One texture map to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSpec {
    pub name: String,
    #[serde(flatten)]
    pub atlas: AtlasParams,
    #[serde(default)]
    pub ordering: Ordering,
}
