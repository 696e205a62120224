//! Sprite and gizmo presentation of the simulation.
//!
//! Each body's outline mask is uploaded once as an RGBA image when the body
//! first appears.  After that only the sprite's transform and tint change:
//! position, rotation and scale follow the body's pose and the tint follows
//! the collision flag (white while colliding, black otherwise).
//!
//! The world-space vertices are drawn on top as a red gizmo outline, which
//! makes the separating-axis polygon visible next to the rasterised stroke.

use crate::body::{BodySnapshot, CollisionTint};
use crate::outline::OutlineMask;
use crate::world::{BodyHandle, SimWorld};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_asset::RenderAssetUsages;

/// Background colour behind the asteroids.
pub const BACKGROUND: Color = Color::srgb(0.54, 0.17, 0.89);

/// Links a sprite entity to the body it presents.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySprite(pub BodyHandle);

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(
                Update,
                (attach_body_sprite_system, sync_body_sprite_system, vertex_gizmo_system)
                    .chain()
                    .run_if(resource_exists::<SimWorld>),
            );
    }
}

/// Expand a mask into RGBA8 bytes: painted pixels opaque white, everything
/// else transparent.  Rows are flipped so row 0 of the image is the highest
/// texture-space Y, matching Bevy's y-up world.
pub fn mask_to_rgba(mask: &OutlineMask) -> Vec<u8> {
    let width = mask.width();
    let mut data = Vec::with_capacity((width * width * 4) as usize);
    for row in (0..width).rev() {
        for x in 0..width {
            let alpha = if mask.is_painted(x, row) { 255 } else { 0 };
            data.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    data
}

fn mask_image(mask: &OutlineMask) -> Image {
    Image::new(
        Extent3d {
            width: mask.width(),
            height: mask.width(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        mask_to_rgba(mask),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn tint_color(tint: CollisionTint) -> Color {
    match tint {
        CollisionTint::Colliding => Color::WHITE,
        CollisionTint::Clear => Color::BLACK,
    }
}

fn sprite_transform(snapshot: &BodySnapshot) -> Transform {
    Transform::from_translation(snapshot.position.extend(0.0))
        .with_rotation(Quat::from_rotation_z(snapshot.rotation_radians()))
        .with_scale(Vec3::splat(snapshot.scale))
}

/// Spawn a sprite for every body that does not have one yet.  Bodies are
/// never removed, so the sprite count doubles as the next unseen handle.
pub fn attach_body_sprite_system(
    mut commands: Commands,
    world: Res<SimWorld>,
    mut images: ResMut<Assets<Image>>,
    mut attached: Local<usize>,
) {
    for handle in world.handles().skip(*attached) {
        let Some(snapshot) = world.snapshot(handle) else {
            continue;
        };
        let image = images.add(mask_image(snapshot.mask));
        commands.spawn((
            BodySprite(handle),
            Sprite {
                color: tint_color(snapshot.tint()),
                ..Sprite::from_image(image)
            },
            sprite_transform(&snapshot),
        ));
        *attached += 1;
    }
}

/// Copy pose and collision tint onto each body's sprite.
pub fn sync_body_sprite_system(
    world: Res<SimWorld>,
    mut sprites: Query<(&BodySprite, &mut Transform, &mut Sprite)>,
) {
    for (body_sprite, mut transform, mut sprite) in sprites.iter_mut() {
        let Some(snapshot) = world.snapshot(body_sprite.0) else {
            continue;
        };
        *transform = sprite_transform(&snapshot);
        sprite.color = tint_color(snapshot.tint());
    }
}

/// Draw each body's world-space polygon.
pub fn vertex_gizmo_system(mut gizmos: Gizmos, world: Res<SimWorld>) {
    for handle in world.handles() {
        let Some(vertices) = world.snapshot(handle).and_then(|s| s.global_vertices) else {
            continue;
        };
        for i in 0..vertices.len() {
            let v1 = vertices[i];
            let v2 = vertices[(i + 1) % vertices.len()];
            gizmos.line_2d(v1, v2, Color::srgb(1.0, 0.0, 0.0));
        }
    }
}
