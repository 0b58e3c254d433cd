use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera framing and projection parameters.
pub struct CameraOptions {
    /// Closest framing distance, used for tiny or empty molecules.
    #[schemars(title = "Minimum Distance", range(min = 1.0, max = 50.0))]
    pub min_distance: f32,
    /// Framing distance as a multiple of the bounding radius.
    #[schemars(title = "Distance Scale", range(min = 1.0, max = 10.0))]
    pub distance_scale: f32,
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            distance_scale: 3.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
