use bevy::prelude::*;

use super::body::Bodies;

/// Links a disc entity to its slot in [`Bodies`].
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyIndex(pub usize);

/// Spawn the 2D camera and one filled disc per body (origin at the window center, +Y up).
pub fn spawn_body_discs(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    bodies: Res<Bodies>,
) {
    commands.spawn(Camera2d);

    for (i, body) in bodies.iter().enumerate() {
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(body.radius()))),
            MeshMaterial2d(materials.add(body.color())),
            Transform::from_xyz(body.position.x, body.position.y, 0.0),
            BodyIndex(i),
        ));
    }
}

/// Copy body positions into transforms once per render frame.
pub fn sync_transforms(bodies: Res<Bodies>, mut q: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut tf) in &mut q {
        if let Some(body) = bodies.get(*i) {
            tf.translation.x = body.position.x;
            tf.translation.y = body.position.y;
        }
    }
}
