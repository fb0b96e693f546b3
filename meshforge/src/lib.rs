//! Deterministic prompt-to-blueprint generation
//!
//! Given a free-text prompt, derives a reproducible "blueprint": a small
//! scene graph of primitive meshes with geometry, material, transform,
//! and surface-deformation parameters. No network, no files, no model
//! calls; the whole pipeline is one synchronous pure computation, so the
//! same prompt always yields a byte-identical blueprint.
//!
//! Pipeline: prompt → seed → hints → (named-template short-circuit |
//! theme → palette → N× mesh composition) → blueprint. Every stage after
//! seed derivation draws from one shared [`rng::Lcg`] in a fixed call
//! order, which is what makes the output reproducible.
//!
//! # Example
//! ```
//! let blueprint = meshforge::generate(Some("a red robot drone"));
//!
//! assert!(!blueprint.meshes.is_empty());
//! assert_eq!(blueprint, meshforge::generate(Some("a red robot drone")));
//!
//! let json = blueprint.to_json_pretty().unwrap();
//! assert!(json.contains("\"seed\""));
//! ```

pub mod blueprint;
pub mod compose;
pub mod hints;
pub mod rng;
pub mod templates;
pub mod theme;

pub use blueprint::{
    Blueprint, Environment, Geometry, GeometryKind, Material, Mesh, ModifierSet, Transform,
};
pub use hints::{DetailBias, PromptHints};
pub use theme::{ThemeId, ThemePreset, THEMES};

use rng::Lcg;

/// Generate a blueprint for a prompt. Total: an absent or blank prompt is
/// normalized to `"abstract artifact"` rather than failing.
pub fn generate(prompt: Option<&str>) -> Blueprint {
    let prompt = rng::normalize_prompt(prompt);
    let seed = rng::derive_seed(&prompt);
    let mut rng = Lcg::new(seed);

    let hints = hints::extract_hints(&prompt);

    // Named templates short-circuit the generic pipeline entirely.
    if let Some(template) = hints.template {
        let (palette, accent, environment) = templates::resolve_template_context(template, &hints);
        let meshes = templates::build_template(template, &palette, &accent, &mut rng);
        tracing::debug!(seed, ?template, meshes = meshes.len(), "template generation");
        return Blueprint {
            prompt,
            seed,
            environment,
            accent,
            meshes,
        };
    }

    let theme = theme::resolve_theme(&hints, &prompt, &mut rng);
    let (palette, accent) = theme::resolve_palette(&hints, theme);
    let count = compose::resolve_mesh_count(&hints, &mut rng);

    let meshes = (0..count)
        .map(|index| compose::compose_mesh(index, &prompt, theme, &hints, &palette, &accent, &mut rng))
        .collect::<Vec<_>>();

    tracing::debug!(seed, theme = ?theme.id, meshes = meshes.len(), "theme generation");

    Blueprint {
        prompt,
        seed,
        environment: hints.environment.unwrap_or(theme.environment),
        accent,
        meshes,
    }
}
