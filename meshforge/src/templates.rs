//! Named template library
//!
//! Hand-authored, recognizable compositions triggered by exact phrase
//! matches. A template match bypasses theme resolution and mesh
//! composition entirely; only palette/accent resolution and small
//! per-part jitter draws remain, taken from the same shared stream.

use crate::blueprint::{Environment, Geometry, Material, Mesh, ModifierSet, Transform};
use crate::hints::PromptHints;
use crate::rng::Lcg;

/// Identifier for one of the fixed named templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    CricketBat,
}

impl TemplateId {
    /// Default coloring and environment used when the prompt carries no
    /// color or environment hints of its own.
    fn defaults(self) -> (&'static [&'static str], &'static str, Environment) {
        match self {
            // Willow blade, cane handle.
            TemplateId::CricketBat => (&["#d9b380", "#8a5a2b", "#1e293b"], "#facc15", Environment::Studio),
        }
    }
}

/// Resolve palette, accent, and environment for a templated generation.
pub fn resolve_template_context(
    id: TemplateId,
    hints: &PromptHints,
) -> (Vec<String>, String, Environment) {
    let (base_palette, base_accent, environment) = id.defaults();
    let palette: Vec<String> = if hints.colors.is_empty() {
        base_palette.iter().map(|c| (*c).to_string()).collect()
    } else {
        let mut merged = hints.colors.clone();
        for color in base_palette {
            if !merged.iter().any(|c| c == color) {
                merged.push((*color).to_string());
            }
        }
        merged.truncate(base_palette.len().max(hints.colors.len()));
        merged
    };
    let accent = hints
        .colors
        .first()
        .cloned()
        .unwrap_or_else(|| base_accent.to_string());
    let environment = hints.environment.unwrap_or(environment);
    (palette, accent, environment)
}

/// Build the fixed mesh list for a template. Per-part jitter comes from
/// the shared stream so templated output is as reproducible as the
/// theme-driven path.
pub fn build_template(
    id: TemplateId,
    palette: &[String],
    accent: &str,
    rng: &mut Lcg,
) -> Vec<Mesh> {
    match id {
        TemplateId::CricketBat => cricket_bat(palette, accent, rng),
    }
}

fn cricket_bat(palette: &[String], accent: &str, rng: &mut Lcg) -> Vec<Mesh> {
    let color_at = |index: usize| palette[index.min(palette.len() - 1)].clone();

    // Stylized proportions, not regulation ones. The blade anchors the
    // composition at the origin like any primary mesh.
    let blade_height = rng.range(1.9, 2.1);
    let blade = Mesh {
        id: format!("box-0-{}", suffix(rng)),
        name: "Willow Blade".to_string(),
        geometry: Geometry::Box {
            width: 0.5,
            height: blade_height,
            depth: rng.range(0.1, 0.14),
        },
        material: Material {
            color: color_at(0),
            metalness: 0.05,
            roughness: 0.6,
            emissive: Some(accent.to_string()),
            wireframe: None,
            use_texture: Some(true),
        },
        transform: Transform::identity(),
        modifiers: None,
    };

    let handle_height = rng.range(0.9, 1.1);
    let handle = Mesh {
        id: format!("cylinder-1-{}", suffix(rng)),
        name: "Cane Handle".to_string(),
        geometry: Geometry::Cylinder {
            radius_top: 0.07,
            radius_bottom: 0.09,
            height: handle_height,
            radial_segments: 16,
            open_ended: false,
        },
        material: Material {
            color: color_at(1),
            metalness: 0.05,
            roughness: 0.85,
            emissive: None,
            wireframe: None,
            use_texture: None,
        },
        transform: Transform {
            position: [0.0, blade_height / 2.0 + handle_height / 2.0 - 0.05, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        },
        modifiers: Some(ModifierSet {
            twist: Some(rng.range(0.02, 0.08)),
            ..ModifierSet::default()
        }),
    };

    let logo_panel = Mesh {
        id: format!("box-2-{}", suffix(rng)),
        name: "Logo Panel".to_string(),
        geometry: Geometry::Box {
            width: 0.3,
            height: 0.42,
            depth: 0.02,
        },
        material: Material {
            color: color_at(2),
            metalness: 0.2,
            roughness: 0.4,
            emissive: None,
            wireframe: None,
            use_texture: None,
        },
        transform: Transform {
            position: [0.0, 0.35, 0.08],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        },
        modifiers: None,
    };

    vec![blade, handle, logo_panel]
}

fn suffix(rng: &mut Lcg) -> u32 {
    rng.range_u32(10_000, 100_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::GeometryKind;
    use crate::hints::extract_hints;

    #[test]
    fn test_cricket_bat_has_three_named_parts() {
        let hints = extract_hints("cricket bat");
        let (palette, accent, _) = resolve_template_context(TemplateId::CricketBat, &hints);
        let mut rng = Lcg::new(123);
        let meshes = build_template(TemplateId::CricketBat, &palette, &accent, &mut rng);
        assert_eq!(meshes.len(), 3);
        assert!(meshes[0].name.contains("Blade"));
        assert!(meshes[1].name.contains("Handle"));
        assert!(meshes[2].name.contains("Panel"));
        assert_eq!(meshes[0].geometry.kind(), GeometryKind::Box);
        assert_eq!(meshes[1].geometry.kind(), GeometryKind::Cylinder);
    }

    #[test]
    fn test_color_hints_recolor_the_template() {
        let hints = extract_hints("a red cricket bat");
        let (palette, accent, _) = resolve_template_context(TemplateId::CricketBat, &hints);
        assert_eq!(palette[0], "#ef4444");
        assert_eq!(accent, "#ef4444");
    }

    #[test]
    fn test_template_blade_anchors_origin() {
        let hints = extract_hints("cricket bat");
        let (palette, accent, _) = resolve_template_context(TemplateId::CricketBat, &hints);
        let mut rng = Lcg::new(9);
        let meshes = build_template(TemplateId::CricketBat, &palette, &accent, &mut rng);
        assert_eq!(meshes[0].transform, Transform::identity());
    }
}
