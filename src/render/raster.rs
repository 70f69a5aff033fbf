//! Triangle rasterization primitives
//!
//! Fills are computed with integer edge functions over the triangle's
//! clipped bounding box. A pixel is covered when it lies inside or on the
//! boundary of the triangle, so the two triangles of a cell tile their quad
//! with no gap (pixels on the shared diagonal are drawn by both).

use glam::{IVec2, Vec2};
use image::Rgba;
use rand::Rng;

use crate::surface::Surface;

/// Radius in pixels of the per-vertex radial gradients
pub const GRADIENT_RADIUS: f32 = 50.0;

/// Twice the signed area of triangle `(a, b, c)`
///
/// i64 keeps the cross product exact for any jittered i32 coordinates.
#[inline]
fn signed_area(a: IVec2, b: IVec2, c: IVec2) -> i64 {
    let abx = (b.x - a.x) as i64;
    let aby = (b.y - a.y) as i64;
    let acx = (c.x - a.x) as i64;
    let acy = (c.y - a.y) as i64;
    abx * acy - aby * acx
}

/// Visit every surface pixel covered by the closed triangle `(a, b, c)`
///
/// Degenerate (zero-area) triangles visit nothing. The iteration domain is
/// the triangle's bounding box clipped to the surface, so triangles partly
/// outside the surface are clipped rather than wrapped.
fn for_each_pixel<F>(width: u32, height: u32, a: IVec2, b: IVec2, c: IVec2, mut visit: F)
where
    F: FnMut(u32, u32),
{
    let area = signed_area(a, b, c);
    if area == 0 {
        return;
    }
    let sign = area.signum();

    let min_x = a.x.min(b.x).min(c.x).max(0);
    let min_y = a.y.min(b.y).min(c.y).max(0);
    let max_x = a.x.max(b.x).max(c.x).min(width as i32 - 1);
    let max_y = a.y.max(b.y).max(c.y).min(height as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = IVec2::new(x, y);
            let inside = sign * signed_area(a, b, p) >= 0
                && sign * signed_area(b, c, p) >= 0
                && sign * signed_area(c, a, p) >= 0;
            if inside {
                visit(x as u32, y as u32);
            }
        }
    }
}

/// Fill a triangle with a single opaque color
pub fn fill_flat(target: &mut Surface, a: IVec2, b: IVec2, c: IVec2, rgb: [u8; 3]) {
    let (width, height) = (target.width(), target.height());
    let color = Rgba([rgb[0], rgb[1], rgb[2], 255]);
    for_each_pixel(width, height, a, b, c, |x, y| {
        target.put(x, y, color);
    });
}

/// Fill a triangle by blending three radial gradients
///
/// The triangle's area is first treated as an opaque black base, then one
/// radial gradient per vertex is accumulated additively on top of it. Each
/// gradient runs from the vertex color at full strength down to nothing at
/// [`GRADIENT_RADIUS`] pixels. Channels saturate at 255, and nothing outside
/// the triangle is touched.
pub fn fill_gradient(
    target: &mut Surface,
    a: IVec2,
    b: IVec2,
    c: IVec2,
    ac: [u8; 3],
    bc: [u8; 3],
    cc: [u8; 3],
) {
    let (width, height) = (target.width(), target.height());
    let centers = [
        (a.as_vec2(), ac),
        (b.as_vec2(), bc),
        (c.as_vec2(), cc),
    ];

    for_each_pixel(width, height, a, b, c, |x, y| {
        let p = Vec2::new(x as f32, y as f32);
        let mut acc = [0.0f32; 3];
        for (center, rgb) in centers {
            let falloff = (1.0 - p.distance(center) / GRADIENT_RADIUS).max(0.0);
            for ch in 0..3 {
                acc[ch] += rgb[ch] as f32 * falloff;
            }
        }
        target.put(
            x,
            y,
            Rgba([
                acc[0].min(255.0) as u8,
                acc[1].min(255.0) as u8,
                acc[2].min(255.0) as u8,
                255,
            ]),
        );
    });
}

/// Pick a uniformly distributed point inside triangle `(a, b, c)`
///
/// Uses the square-root barycentric formula: with `r1, r2` uniform in
/// `[0, 1)` and `s = sqrt(r1)`, the point `(1-s)a + s(1-r2)b + s*r2*c` is
/// uniform over the triangle's area. Without the square root the samples
/// would cluster toward vertex `a` and bias the sampled color.
pub fn random_interior_point(a: IVec2, b: IVec2, c: IVec2, rng: &mut impl Rng) -> IVec2 {
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();
    let s = r1.sqrt();

    let wa = 1.0 - s;
    let wb = s * (1.0 - r2);
    let wc = s * r2;

    let x = wa * a.x as f64 + wb * b.x as f64 + wc * c.x as f64;
    let y = wa * a.y as f64 + wb * b.y as f64 + wc * c.y as f64;
    IVec2::new(x.floor() as i32, y.floor() as i32)
}
