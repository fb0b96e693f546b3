//! Mesh composition
//!
//! The generative core: for each mesh index, builds geometry kind and
//! parameters, spatial transform, material, deformation modifiers, and
//! identity, biased by the governing theme and the prompt's detail bias.
//!
//! Draw order per mesh is fixed: kind pick, geometry parameters,
//! transform, material, modifiers, id suffix, call-sign word. Changing it
//! changes every downstream value for the same seed.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::blueprint::{Geometry, GeometryKind, Material, Mesh, ModifierSet, Transform};
use crate::hints::{DetailBias, PromptHints};
use crate::rng::Lcg;
use crate::theme::ThemePreset;

/// Name-seed words combined with a geometry title for mesh display names.
const CALL_SIGNS: &[&str] = &[
    "Nova", "Vertex", "Orbit", "Flux", "Helix", "Aster", "Pylon", "Quasar", "Zephyr", "Sable",
];

/// Resolve the mesh count for one generation: explicit hint target, else
/// a random value in [2, 4], always clamped to [1, 4].
pub fn resolve_mesh_count(hints: &PromptHints, rng: &mut Lcg) -> usize {
    let count = hints
        .mesh_count
        .unwrap_or_else(|| 2 + rng.range_u32(0, 3) as usize);
    count.clamp(1, 4)
}

/// Compose the mesh at `index`. Index 0 is primary: identity transform,
/// first palette color, textured, emissive accent.
pub fn compose_mesh(
    index: usize,
    prompt: &str,
    theme: &ThemePreset,
    hints: &PromptHints,
    palette: &[String],
    accent: &str,
    rng: &mut Lcg,
) -> Mesh {
    let kind = pick_kind(index, hints, theme, rng);
    let geometry = compose_geometry(kind, rng);
    let transform = compose_transform(index, rng);
    let material = compose_material(index, palette, accent, theme, hints.detail, rng);
    let modifiers = compose_modifiers(theme, hints.detail, rng);

    let id = format!("{}-{}-{}", kind.tag(), index, rng.range_u32(10_000, 100_000));
    let sign = rng.pick(CALL_SIGNS);
    let name = if index == 0 {
        format!("{} {} Prime", sign, kind.title())
    } else {
        let first_word = prompt.split_whitespace().next().unwrap_or("form");
        format!("{} {} {}", sign, kind.title(), first_word)
    };

    Mesh {
        id,
        name,
        geometry,
        material,
        transform,
        modifiers: Some(modifiers),
    }
}

fn pick_kind(
    index: usize,
    hints: &PromptHints,
    theme: &ThemePreset,
    rng: &mut Lcg,
) -> GeometryKind {
    let mut pool: Vec<GeometryKind> = Vec::with_capacity(5);
    if let Some(kind) = hints.geometry {
        pool.push(kind);
    }
    if index == 0 {
        pool.extend_from_slice(theme.primary_pool);
    } else {
        pool.extend_from_slice(theme.secondary_pool);
    }
    if pool.is_empty() {
        // Theme secondary pools are never empty, so selection stays total.
        return *rng.pick(theme.secondary_pool);
    }
    *rng.pick(&pool)
}

fn compose_geometry(kind: GeometryKind, rng: &mut Lcg) -> Geometry {
    match kind {
        GeometryKind::Sphere => Geometry::Sphere {
            radius: rng.range(1.1, 1.8),
            width_segments: rng.range_u32(32, 48),
            height_segments: rng.range_u32(18, 32),
        },
        GeometryKind::Box => Geometry::Box {
            width: rng.range(1.0, 2.2),
            height: rng.range(1.0, 1.6),
            depth: rng.range(1.0, 2.0),
        },
        GeometryKind::Torus => Geometry::Torus {
            radius: rng.range(1.2, 1.9),
            tube: rng.range(0.2, 0.5),
            radial_segments: rng.range_u32(12, 20),
            tubular_segments: rng.range_u32(48, 72),
        },
        GeometryKind::Cylinder => Geometry::Cylinder {
            radius_top: rng.range(0.4, 0.9),
            radius_bottom: rng.range(0.5, 1.1),
            height: rng.range(2.0, 3.2),
            radial_segments: rng.range_u32(16, 32),
            open_ended: rng.chance(0.2),
        },
        GeometryKind::Cone => Geometry::Cone {
            radius: rng.range(0.8, 1.4),
            height: rng.range(1.4, 2.4),
            radial_segments: rng.range_u32(16, 32),
            open_ended: false,
        },
        GeometryKind::Icosahedron => Geometry::Icosahedron {
            radius: rng.range(1.2, 1.7),
            detail: rng.range_u32(0, 2),
        },
    }
}

fn compose_transform(index: usize, rng: &mut Lcg) -> Transform {
    if index == 0 {
        // The primary mesh anchors the composition.
        return Transform::identity();
    }
    let position = Vec3::new(
        rng.range(-1.2, 1.2),
        rng.range(-0.2, 1.2),
        rng.range(-1.2, 1.2),
    );
    let rotation = Vec3::new(
        rng.range(-0.3, 0.3),
        rng.range(0.0, TAU),
        rng.range(-0.3, 0.3),
    );
    let scale = Vec3::new(
        rng.range(0.45, 0.9),
        rng.range(0.45, 0.9),
        rng.range(0.45, 0.9),
    );
    Transform {
        position: position.to_array(),
        rotation: rotation.to_array(),
        scale: scale.to_array(),
    }
}

fn compose_material(
    index: usize,
    palette: &[String],
    accent: &str,
    theme: &ThemePreset,
    bias: DetailBias,
    rng: &mut Lcg,
) -> Material {
    let color = if index == 0 || palette.len() == 1 {
        palette[0].clone()
    } else {
        let pick = 1 + rng.range_u32(0, (palette.len() - 1) as u32) as usize;
        palette[pick].clone()
    };

    let (metal_shift, rough_shift) = match bias {
        DetailBias::Organic => (-0.2, 0.2),
        DetailBias::Mechanical => (0.15, -0.1),
        DetailBias::Neutral => (0.0, 0.0),
    };
    let metalness = (theme.metalness + metal_shift).clamp(0.0, 1.0);
    let roughness = (theme.roughness + rough_shift).clamp(0.0, 1.0);

    // Roughly 15% of secondary meshes render as wireframe; the primary
    // never does, and never consumes the draw.
    let wireframe = (index > 0 && rng.chance(0.15)).then_some(true);

    Material {
        color,
        metalness,
        roughness,
        emissive: (index == 0).then(|| accent.to_string()),
        wireframe,
        use_texture: (index == 0).then_some(true),
    }
}

fn compose_modifiers(theme: &ThemePreset, bias: DetailBias, rng: &mut Lcg) -> ModifierSet {
    let detail_mult = match bias {
        DetailBias::Organic => 1.25,
        DetailBias::Mechanical => 0.65,
        DetailBias::Neutral => 1.0,
    };
    let base = &theme.modifiers;

    let mut noise_amplitude = base
        .noise_amplitude
        .map(|v| v * rng.range(0.9, 1.4) * detail_mult);
    let noise_frequency = base
        .noise_frequency
        .map(|v| v * rng.range(0.8, 1.3) * detail_mult);
    let twist = base.twist.map(|v| v * rng.range(0.7, 1.3) * detail_mult);
    let mut taper = base.taper.map(|v| v * rng.range(0.5, 1.2) * detail_mult);
    let mut squash = base.squash.map(|v| v * rng.range(0.8, 1.2) * detail_mult);

    // Mechanical forms get a second damping pass and end up visibly less
    // deformed than organic ones.
    if bias == DetailBias::Mechanical {
        noise_amplitude = noise_amplitude.map(|v| v * 0.8);
        taper = taper.map(|v| v * 0.7);
        squash = squash.map(|v| v * 0.6);
    }

    // Phase is an independent draw regardless of bias.
    let noise_phase = Some(rng.range(0.0, TAU));

    ModifierSet {
        noise_amplitude,
        noise_frequency,
        noise_phase,
        twist,
        taper,
        squash,
    }
}
