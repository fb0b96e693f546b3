//! Theme presets and resolution
//!
//! Four stylistic presets expressed as a declarative catalog. Selection
//! order is: explicit hint id, then first catalog entry with a keyword
//! substring match, then a seeded random pick. The order (and the catalog
//! order itself) is part of the reproducibility contract.

use crate::blueprint::{Environment, GeometryKind};
use crate::hints::PromptHints;
use crate::rng::Lcg;

/// Identifier for one of the fixed theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Mechanical,
    Organic,
    Aero,
    Abstract,
}

/// Base deformation magnitudes carried by a theme. An absent field means
/// meshes of that theme never get the corresponding modifier.
#[derive(Debug, Clone, Copy)]
pub struct BaseModifiers {
    pub noise_amplitude: Option<f32>,
    pub noise_frequency: Option<f32>,
    pub twist: Option<f32>,
    pub taper: Option<f32>,
    pub squash: Option<f32>,
}

/// One entry of the theme catalog. Read-only configuration data.
#[derive(Debug)]
pub struct ThemePreset {
    pub id: ThemeId,
    pub keywords: &'static [&'static str],
    pub primary_pool: &'static [GeometryKind],
    pub secondary_pool: &'static [GeometryKind],
    pub palette: &'static [&'static str],
    pub metalness: f32,
    pub roughness: f32,
    pub environment: Environment,
    pub accent: &'static str,
    pub modifiers: BaseModifiers,
}

/// The theme catalog, in match-precedence order.
pub const THEMES: &[ThemePreset] = &[
    ThemePreset {
        id: ThemeId::Mechanical,
        keywords: &[
            "robot", "drone", "mech", "machine", "gear", "engine", "tank", "turbine", "cyber",
            "reactor",
        ],
        primary_pool: &[GeometryKind::Box, GeometryKind::Cylinder],
        secondary_pool: &[
            GeometryKind::Box,
            GeometryKind::Cylinder,
            GeometryKind::Cone,
            GeometryKind::Torus,
        ],
        palette: &["#64748b", "#94a3b8", "#334155", "#0ea5e9"],
        metalness: 0.8,
        roughness: 0.35,
        environment: Environment::Studio,
        accent: "#38bdf8",
        modifiers: BaseModifiers {
            noise_amplitude: Some(0.05),
            noise_frequency: Some(2.5),
            twist: None,
            taper: Some(0.12),
            squash: Some(0.08),
        },
    },
    ThemePreset {
        id: ThemeId::Organic,
        keywords: &[
            "creature", "plant", "coral", "tree", "flower", "mushroom", "alien", "blob", "moss",
            "vine",
        ],
        primary_pool: &[GeometryKind::Sphere, GeometryKind::Icosahedron],
        secondary_pool: &[
            GeometryKind::Sphere,
            GeometryKind::Torus,
            GeometryKind::Cone,
            GeometryKind::Icosahedron,
        ],
        palette: &["#22c55e", "#84cc16", "#15803d", "#a3e635"],
        metalness: 0.1,
        roughness: 0.7,
        environment: Environment::Forest,
        accent: "#bef264",
        modifiers: BaseModifiers {
            noise_amplitude: Some(0.22),
            noise_frequency: Some(1.4),
            twist: Some(0.35),
            taper: Some(0.3),
            squash: Some(0.25),
        },
    },
    ThemePreset {
        id: ThemeId::Aero,
        keywords: &[
            "plane", "jet", "rocket", "glider", "winged", "aircraft", "missile", "dart", "falcon",
            "arrow",
        ],
        primary_pool: &[GeometryKind::Cone, GeometryKind::Cylinder],
        secondary_pool: &[
            GeometryKind::Cone,
            GeometryKind::Box,
            GeometryKind::Cylinder,
        ],
        palette: &["#e2e8f0", "#94a3b8", "#f97316", "#475569"],
        metalness: 0.6,
        roughness: 0.3,
        environment: Environment::Sunset,
        accent: "#fb923c",
        modifiers: BaseModifiers {
            noise_amplitude: Some(0.04),
            noise_frequency: Some(2.0),
            twist: Some(0.1),
            taper: Some(0.45),
            squash: None,
        },
    },
    ThemePreset {
        id: ThemeId::Abstract,
        keywords: &[
            "crystal",
            "dream",
            "chaos",
            "sculpture",
            "art",
            "geometric",
            "prism",
            "fractal",
        ],
        primary_pool: &[GeometryKind::Icosahedron, GeometryKind::Torus],
        secondary_pool: &[
            GeometryKind::Sphere,
            GeometryKind::Box,
            GeometryKind::Torus,
            GeometryKind::Icosahedron,
        ],
        palette: &["#a855f7", "#ec4899", "#6366f1", "#f472b6"],
        metalness: 0.4,
        roughness: 0.45,
        environment: Environment::Void,
        accent: "#f0abfc",
        modifiers: BaseModifiers {
            noise_amplitude: Some(0.16),
            noise_frequency: Some(1.8),
            twist: Some(0.5),
            taper: Some(0.2),
            squash: Some(0.15),
        },
    },
];

fn preset(id: ThemeId) -> &'static ThemePreset {
    THEMES
        .iter()
        .find(|theme| theme.id == id)
        .unwrap_or(&THEMES[0])
}

/// Pick the governing theme for a generation.
///
/// The random fallback draws from the shared stream, so whether earlier
/// branches matched is itself part of the reproducibility contract.
pub fn resolve_theme(hints: &PromptHints, prompt: &str, rng: &mut Lcg) -> &'static ThemePreset {
    if let Some(id) = hints.theme {
        return preset(id);
    }
    let text = prompt.to_lowercase();
    for theme in THEMES {
        if theme.keywords.iter().any(|keyword| text.contains(keyword)) {
            return theme;
        }
    }
    rng.pick(THEMES)
}

/// Merge hint-derived color overrides with the theme's palette.
///
/// No color hint: theme palette and accent verbatim. Otherwise the union
/// (hint colors first, theme colors after, duplicates removed), truncated
/// to the theme's palette length unless the hints alone exceed it; accent
/// becomes the first hint color.
pub fn resolve_palette(hints: &PromptHints, theme: &ThemePreset) -> (Vec<String>, String) {
    if hints.colors.is_empty() {
        let palette = theme.palette.iter().map(|c| (*c).to_string()).collect();
        return (palette, theme.accent.to_string());
    }

    let mut palette: Vec<String> = hints.colors.clone();
    for color in theme.palette {
        if !palette.iter().any(|c| c == color) {
            palette.push((*color).to_string());
        }
    }
    let target = theme.palette.len().max(hints.colors.len());
    palette.truncate(target);

    (palette, hints.colors[0].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::extract_hints;

    #[test]
    fn test_explicit_hint_beats_keywords() {
        let hints = extract_hints("an organic robot");
        let mut rng = Lcg::new(1);
        let theme = resolve_theme(&hints, "an organic robot", &mut rng);
        assert_eq!(theme.id, ThemeId::Organic);
    }

    #[test]
    fn test_keyword_match_follows_catalog_order() {
        let hints = extract_hints("a robot creature");
        let mut rng = Lcg::new(1);
        let theme = resolve_theme(&hints, "a robot creature", &mut rng);
        // Mechanical precedes organic in the catalog.
        assert_eq!(theme.id, ThemeId::Mechanical);
    }

    #[test]
    fn test_crystal_resolves_abstract() {
        let prompt = "a single glowing crystal statue";
        let hints = extract_hints(prompt);
        let mut rng = Lcg::new(1);
        assert_eq!(resolve_theme(&hints, prompt, &mut rng).id, ThemeId::Abstract);
    }

    #[test]
    fn test_random_fallback_is_seeded() {
        let hints = extract_hints("zzz qqq");
        let a = resolve_theme(&hints, "zzz qqq", &mut Lcg::new(77)).id;
        let b = resolve_theme(&hints, "zzz qqq", &mut Lcg::new(77)).id;
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_without_hints_is_verbatim() {
        let hints = extract_hints("mysterious thing");
        let theme = preset(ThemeId::Organic);
        let (palette, accent) = resolve_palette(&hints, theme);
        assert_eq!(palette.len(), theme.palette.len());
        assert_eq!(palette[0], theme.palette[0]);
        assert_eq!(accent, theme.accent);
    }

    #[test]
    fn test_palette_hint_colors_come_first() {
        let hints = extract_hints("red and blue contraption");
        let theme = preset(ThemeId::Mechanical);
        let (palette, accent) = resolve_palette(&hints, theme);
        assert_eq!(palette[0], "#ef4444");
        assert_eq!(palette[1], "#3b82f6");
        assert_eq!(palette.len(), theme.palette.len());
        assert_eq!(accent, "#ef4444");
    }

    #[test]
    fn test_theme_palettes_are_well_formed() {
        for theme in THEMES {
            assert!(!theme.primary_pool.is_empty());
            assert!(!theme.secondary_pool.is_empty());
            assert!(!theme.palette.is_empty());
            for color in theme.palette.iter().chain([&theme.accent]) {
                assert!(color.starts_with('#') && color.len() == 7, "{color}");
            }
        }
    }
}
