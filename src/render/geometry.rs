//! Rotated rectangle math in screen coordinates (origin top-left, Y down).
//!
//! Used by rasterizer adapters and to verify the center-rotation contract.

use glam::Vec2;

/// Corner positions of a rectangle centered at `center`, rotated
/// `rotation` degrees clockwise about that center.
///
/// Corners come back in order: top-left, top-right, bottom-right,
/// bottom-left (as seen at rotation 0).
pub fn rect_corners(center: Vec2, size: Vec2, rotation: f32) -> [Vec2; 4] {
    let half = size * 0.5;
    let theta = rotation.to_radians();
    let (sin, cos) = theta.sin_cos();

    // With Y pointing down, this matrix turns positive angles clockwise
    // on screen, matching the sprite rotation convention.
    let rotate = |local: Vec2| {
        center
            + Vec2::new(
                local.x * cos - local.y * sin,
                local.x * sin + local.y * cos,
            )
    };

    [
        rotate(Vec2::new(-half.x, -half.y)),
        rotate(Vec2::new(half.x, -half.y)),
        rotate(Vec2::new(half.x, half.y)),
        rotate(Vec2::new(-half.x, half.y)),
    ]
}

/// Axis-aligned bounds (min, max) of the rotated rectangle.
pub fn rect_aabb(center: Vec2, size: Vec2, rotation: f32) -> (Vec2, Vec2) {
    let corners = rect_corners(center, size, rotation);
    let mut min = corners[0];
    let mut max = corners[0];
    for corner in &corners[1..] {
        min = min.min(*corner);
        max = max.max(*corner);
    }
    (min, max)
}
