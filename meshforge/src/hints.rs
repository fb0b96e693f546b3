//! Prompt hint extraction
//!
//! Scans lower-cased prompt text against fixed keyword tables and produces
//! a structured hint set. Matching is substring containment, first match
//! wins per category, except colors which accumulate into an ordered
//! de-duplicated list. Table order is load-bearing: reordering entries
//! changes classification for ambiguous prompts and is a behavior change,
//! not a refactor.

use crate::blueprint::{Environment, GeometryKind};
use crate::templates::TemplateId;
use crate::theme::ThemeId;

/// Coarse organic/mechanical classification that scales deformation and
/// material parameters downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailBias {
    #[default]
    Neutral,
    Organic,
    Mechanical,
}

/// Structured signals extracted from one prompt. Every field is optional;
/// absence biases nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptHints {
    pub geometry: Option<GeometryKind>,
    /// Ordered, de-duplicated color overrides. Empty means no color hint.
    pub colors: Vec<String>,
    pub environment: Option<Environment>,
    pub theme: Option<ThemeId>,
    pub detail: DetailBias,
    /// Explicit mesh-count target (1 for "single" cues, 4 for "multi").
    pub mesh_count: Option<usize>,
    pub template: Option<TemplateId>,
}

const GEOMETRY_CUES: &[(&str, GeometryKind)] = &[
    ("sphere", GeometryKind::Sphere),
    ("orb", GeometryKind::Sphere),
    ("ball", GeometryKind::Sphere),
    ("planet", GeometryKind::Sphere),
    ("cube", GeometryKind::Box),
    ("box", GeometryKind::Box),
    ("crate", GeometryKind::Box),
    ("block", GeometryKind::Box),
    ("torus", GeometryKind::Torus),
    ("ring", GeometryKind::Torus),
    ("donut", GeometryKind::Torus),
    ("halo", GeometryKind::Torus),
    ("cylinder", GeometryKind::Cylinder),
    ("pillar", GeometryKind::Cylinder),
    ("column", GeometryKind::Cylinder),
    ("barrel", GeometryKind::Cylinder),
    ("cone", GeometryKind::Cone),
    ("spike", GeometryKind::Cone),
    ("pyramid", GeometryKind::Cone),
    ("horn", GeometryKind::Cone),
    ("icosahedron", GeometryKind::Icosahedron),
    ("crystal", GeometryKind::Icosahedron),
    ("gem", GeometryKind::Icosahedron),
    ("shard", GeometryKind::Icosahedron),
];

const COLOR_CUES: &[(&str, &str)] = &[
    ("red", "#ef4444"),
    ("crimson", "#dc2626"),
    ("orange", "#f97316"),
    ("amber", "#f59e0b"),
    ("gold", "#f59e0b"),
    ("yellow", "#facc15"),
    ("green", "#22c55e"),
    ("emerald", "#10b981"),
    ("teal", "#14b8a6"),
    ("cyan", "#06b6d4"),
    ("turquoise", "#06b6d4"),
    ("blue", "#3b82f6"),
    ("navy", "#1d4ed8"),
    ("indigo", "#6366f1"),
    ("purple", "#a855f7"),
    ("violet", "#8b5cf6"),
    ("magenta", "#d946ef"),
    ("pink", "#ec4899"),
    ("white", "#f8fafc"),
    ("silver", "#cbd5e1"),
    ("gray", "#94a3b8"),
    ("grey", "#94a3b8"),
    ("black", "#1e293b"),
];

const ENVIRONMENT_CUES: &[(&str, Environment)] = &[
    ("space", Environment::Space),
    ("galaxy", Environment::Space),
    ("cosmic", Environment::Space),
    ("nebula", Environment::Space),
    ("orbit", Environment::Space),
    ("studio", Environment::Studio),
    ("showroom", Environment::Studio),
    ("sunset", Environment::Sunset),
    ("dusk", Environment::Sunset),
    ("dawn", Environment::Sunset),
    ("forest", Environment::Forest),
    ("jungle", Environment::Forest),
    ("garden", Environment::Forest),
    ("meadow", Environment::Forest),
    ("void", Environment::Void),
    ("abyss", Environment::Void),
    ("midnight", Environment::Void),
];

// Explicit style words that force a theme, as opposed to the looser
// trigger keywords each theme preset carries.
const THEME_CUES: &[(&str, ThemeId)] = &[
    ("mechanical", ThemeId::Mechanical),
    ("organic", ThemeId::Organic),
    ("aero", ThemeId::Aero),
    ("abstract", ThemeId::Abstract),
];

const SINGLE_CUES: &[&str] = &["single", "solo", "lone", "solitary", "statue", "monolith"];

const MULTI_CUES: &[&str] = &[
    "swarm",
    "cluster",
    "fleet",
    "constellation",
    "multiple",
    "many",
    "scattered",
];

// Organic is checked before mechanical; first category with a match wins.
const ORGANIC_CUES: &[&str] = &[
    "organic", "creature", "plant", "coral", "flower", "tree", "mushroom", "smooth", "flowing",
    "soft", "blob", "alien",
];

const MECHANICAL_CUES: &[&str] = &[
    "robot",
    "drone",
    "mech",
    "machine",
    "gear",
    "engine",
    "industrial",
    "angular",
    "metal",
    "cyber",
    "turbine",
];

const TEMPLATE_CUES: &[(&str, TemplateId)] = &[("cricket bat", TemplateId::CricketBat)];

/// Extract hints from a raw (already normalized) prompt.
pub fn extract_hints(prompt: &str) -> PromptHints {
    let text = prompt.to_lowercase();

    let geometry = first_match(GEOMETRY_CUES, &text);

    let mut colors = Vec::new();
    for (cue, hex) in COLOR_CUES {
        if text.contains(cue) && !colors.iter().any(|c| c == hex) {
            colors.push((*hex).to_string());
        }
    }

    let environment = first_match(ENVIRONMENT_CUES, &text);
    let theme = first_match(THEME_CUES, &text);
    let template = first_match(TEMPLATE_CUES, &text);

    let mesh_count = if SINGLE_CUES.iter().any(|cue| text.contains(cue)) {
        Some(1)
    } else if MULTI_CUES.iter().any(|cue| text.contains(cue)) {
        Some(4)
    } else {
        None
    };

    let detail = if ORGANIC_CUES.iter().any(|cue| text.contains(cue)) {
        DetailBias::Organic
    } else if MECHANICAL_CUES.iter().any(|cue| text.contains(cue)) {
        DetailBias::Mechanical
    } else {
        DetailBias::Neutral
    };

    PromptHints {
        geometry,
        colors,
        environment,
        theme,
        detail,
        mesh_count,
        template,
    }
}

fn first_match<T: Copy>(table: &[(&str, T)], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(cue, _)| text.contains(cue))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_robot_drone() {
        let hints = extract_hints("a red robot drone");
        assert_eq!(hints.colors, vec!["#ef4444".to_string()]);
        assert_eq!(hints.detail, DetailBias::Mechanical);
        assert_eq!(hints.theme, None);
        assert_eq!(hints.mesh_count, None);
    }

    #[test]
    fn test_single_glowing_crystal_statue() {
        let hints = extract_hints("a single glowing crystal statue");
        assert_eq!(hints.mesh_count, Some(1));
        assert_eq!(hints.geometry, Some(GeometryKind::Icosahedron));
        assert_eq!(hints.detail, DetailBias::Neutral);
    }

    #[test]
    fn test_colors_accumulate_in_table_order_without_duplicates() {
        // "golden" matches the gold cue, which shares amber's hex and gets
        // de-duplicated. Accumulation order is table order.
        let hints = extract_hints("blue and red, golden amber");
        assert_eq!(
            hints.colors,
            vec!["#ef4444", "#f59e0b", "#3b82f6"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_explicit_theme_cue() {
        assert_eq!(
            extract_hints("an abstract tangle").theme,
            Some(ThemeId::Abstract)
        );
        assert_eq!(
            extract_hints("aerodynamic racer").theme,
            Some(ThemeId::Aero)
        );
    }

    #[test]
    fn test_organic_checked_before_mechanical() {
        let hints = extract_hints("an organic machine");
        assert_eq!(hints.detail, DetailBias::Organic);
    }

    #[test]
    fn test_multi_cue_forces_four() {
        assert_eq!(extract_hints("a swarm of shapes").mesh_count, Some(4));
    }

    #[test]
    fn test_template_trigger_is_exact_phrase() {
        assert_eq!(
            extract_hints("a worn cricket bat").template,
            Some(TemplateId::CricketBat)
        );
        assert_eq!(extract_hints("a cricket and a bat").template, None);
    }

    #[test]
    fn test_neutral_prompt_has_no_hints() {
        let hints = extract_hints("something pleasant");
        assert_eq!(hints, PromptHints::default());
    }
}
