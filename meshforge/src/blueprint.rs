//! Blueprint data model
//!
//! The output of one generation call: a small scene graph of primitive
//! meshes with geometry, material, transform, and deformation parameters.
//! The serialized shape (camelCase fields, lowercase string tags, vectors
//! as fixed 3-element arrays) is the contract consumed by the rendering
//! layer and must remain stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error for parsing an enumerated string tag.
#[derive(Debug, thiserror::Error)]
#[error("unknown {category} tag: {value:?}")]
pub struct ParseTagError {
    category: &'static str,
    value: String,
}

/// Environment tag attached to a blueprint, used by the renderer to pick
/// lighting and backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Studio,
    Space,
    Sunset,
    Forest,
    Void,
}

impl Environment {
    pub fn tag(self) -> &'static str {
        match self {
            Environment::Studio => "studio",
            Environment::Space => "space",
            Environment::Sunset => "sunset",
            Environment::Forest => "forest",
            Environment::Void => "void",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Environment {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "studio" => Ok(Environment::Studio),
            "space" => Ok(Environment::Space),
            "sunset" => Ok(Environment::Sunset),
            "forest" => Ok(Environment::Forest),
            "void" => Ok(Environment::Void),
            _ => Err(ParseTagError {
                category: "environment",
                value: s.to_string(),
            }),
        }
    }
}

/// The six primitive kinds a mesh can be built from.
///
/// Kept separate from [`Geometry`] so catalogs and hints can talk about a
/// kind without carrying parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Sphere,
    Box,
    Torus,
    Cylinder,
    Cone,
    Icosahedron,
}

impl GeometryKind {
    pub fn tag(self) -> &'static str {
        match self {
            GeometryKind::Sphere => "sphere",
            GeometryKind::Box => "box",
            GeometryKind::Torus => "torus",
            GeometryKind::Cylinder => "cylinder",
            GeometryKind::Cone => "cone",
            GeometryKind::Icosahedron => "icosahedron",
        }
    }

    /// Title-case word used when naming meshes.
    pub fn title(self) -> &'static str {
        match self {
            GeometryKind::Sphere => "Sphere",
            GeometryKind::Box => "Block",
            GeometryKind::Torus => "Ring",
            GeometryKind::Cylinder => "Column",
            GeometryKind::Cone => "Spire",
            GeometryKind::Icosahedron => "Shard",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GeometryKind {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sphere" => Ok(GeometryKind::Sphere),
            "box" => Ok(GeometryKind::Box),
            "torus" => Ok(GeometryKind::Torus),
            "cylinder" => Ok(GeometryKind::Cylinder),
            "cone" => Ok(GeometryKind::Cone),
            "icosahedron" => Ok(GeometryKind::Icosahedron),
            _ => Err(ParseTagError {
                category: "geometry",
                value: s.to_string(),
            }),
        }
    }
}

/// Primitive geometry with kind-specific parameters.
///
/// Exactly one variant is active per mesh. Consumption sites match
/// exhaustively so adding a seventh kind is a compile-time-checked
/// exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        open_ended: bool,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
        open_ended: bool,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Sphere { .. } => GeometryKind::Sphere,
            Geometry::Box { .. } => GeometryKind::Box,
            Geometry::Torus { .. } => GeometryKind::Torus,
            Geometry::Cylinder { .. } => GeometryKind::Cylinder,
            Geometry::Cone { .. } => GeometryKind::Cone,
            Geometry::Icosahedron { .. } => GeometryKind::Icosahedron,
        }
    }
}

/// PBR-ish material parameters. Colors are `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub color: String,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metalness: f32,
    /// Roughness factor (0.0 = mirror, 1.0 = rough).
    pub roughness: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireframe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_texture: Option<bool>,
}

/// Position, Euler rotation (radians), and per-axis scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    /// Origin, no rotation, unit scale. The primary mesh always gets this.
    pub fn identity() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// Surface-deformation parameters. Every field is independently optional;
/// absence means "no effect", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_amplitude: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_frequency: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_phase: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twist: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taper: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash: Option<f32>,
}

/// One mesh in the blueprint's scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    /// Unique within the blueprint.
    pub id: String,
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<ModifierSet>,
}

/// The full output record of one generation call.
///
/// Immutable once produced; one blueprint per request, owned by the
/// caller. Element 0 of `meshes` is always the primary mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub prompt: String,
    pub seed: u32,
    pub environment: Environment,
    pub accent: String,
    pub meshes: Vec<Mesh>,
}

impl Blueprint {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_serializes_with_kind_tag() {
        let geo = Geometry::Sphere {
            radius: 1.5,
            width_segments: 32,
            height_segments: 24,
        };
        let json = serde_json::to_value(&geo).unwrap();
        assert_eq!(json["kind"], "sphere");
        assert_eq!(json["widthSegments"], 32);
    }

    #[test]
    fn test_material_omits_absent_options() {
        let mat = Material {
            color: "#ef4444".to_string(),
            metalness: 0.5,
            roughness: 0.5,
            emissive: None,
            wireframe: None,
            use_texture: None,
        };
        let json = serde_json::to_value(&mat).unwrap();
        assert!(json.get("emissive").is_none());
        assert!(json.get("wireframe").is_none());
        assert!(json.get("useTexture").is_none());
    }

    #[test]
    fn test_environment_round_trips_through_tag() {
        for env in [
            Environment::Studio,
            Environment::Space,
            Environment::Sunset,
            Environment::Forest,
            Environment::Void,
        ] {
            assert_eq!(env.tag().parse::<Environment>().unwrap(), env);
        }
        assert!("underwater".parse::<Environment>().is_err());
    }

    #[test]
    fn test_geometry_kind_from_str() {
        assert_eq!(
            "icosahedron".parse::<GeometryKind>().unwrap(),
            GeometryKind::Icosahedron
        );
        assert!("teapot".parse::<GeometryKind>().is_err());
    }
}
