use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes used when turning atoms and bonds into primitives.
pub struct GeometryOptions {
    /// Bond cylinder radius in ångström (all bond orders).
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 0.5))]
    pub bond_radius: f32,
    /// Lateral offset of each cylinder of a double bond.
    #[schemars(title = "Double Bond Offset", range(min = 0.0, max = 1.0))]
    pub double_bond_offset: f32,
    /// Lateral offset of the outer cylinders of a triple bond.
    #[schemars(title = "Triple Bond Offset", range(min = 0.0, max = 1.0))]
    pub triple_bond_offset: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            bond_radius: 0.07,
            double_bond_offset: 0.15,
            triple_bond_offset: 0.20,
        }
    }
}
