//! Triangle rendering for low-poly generation
//!
//! Consumes a sampled [`Lattice`] and paints the triangulated rendition onto
//! a copy of the source surface.
//!
//! # Algorithm
//!
//! Every 2x2 cell of adjacent lattice points forms a quadrilateral that is
//! split into two triangles along one of its diagonals, chosen uniformly at
//! random and independently per cell. The two triangles exactly tile the
//! cell, so the interior of the image is covered with no gaps; border
//! strips past the last lattice row and column keep the source pixels.
//!
//! Triangles are ephemeral draw operations. Nothing is retained after a
//! pass besides the mutated surface.

pub mod raster;

pub use raster::GRADIENT_RADIUS;

use glam::IVec2;
use rand::Rng;

use crate::config::{RenderConfig, ShadingMode};
use crate::lattice::Lattice;
use crate::surface::Surface;

/// Render the triangulated rendition of `source` described by `lattice`
///
/// The output starts as a copy of the source image, then each lattice cell
/// is painted as two triangles. In flat mode every triangle is filled with
/// the source color at one random interior point; in gradient mode it is
/// filled by blending radial gradients centered on its vertices.
///
/// Lattices with fewer than two rows or columns have no cells, so the
/// result is simply the source copy.
///
/// # Example
///
/// ```
/// use lowpoly::{render, sample_lattice, RenderConfig, Surface};
/// use rand::SeedableRng;
///
/// let source = Surface::filled(64, 64, [180, 90, 40]);
/// let config = RenderConfig::builder().seed(42).spacing(16).build();
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(config.seed as u64);
///
/// let lattice = sample_lattice(&source, &config, &mut rng);
/// let result = render(&source, &lattice, &config, &mut rng);
/// assert_eq!(result.width(), 64);
/// ```
pub fn render(
    source: &Surface,
    lattice: &Lattice,
    config: &RenderConfig,
    rng: &mut impl Rng,
) -> Surface {
    let mut target = source.clone();
    if lattice.x_count() < 2 || lattice.y_count() < 2 {
        return target;
    }

    let mut cells = 0usize;
    for x in 0..lattice.x_count() - 1 {
        for y in 0..lattice.y_count() - 1 {
            let a = lattice.point(x, y);
            let b = lattice.point(x + 1, y);
            let c = lattice.point(x, y + 1);
            let d = lattice.point(x + 1, y + 1);

            // One independent draw decides the diagonal for this cell
            let split: f64 = rng.gen();

            match config.shading {
                ShadingMode::Flat => {
                    if split > 0.5 {
                        flat_triangle(source, &mut target, a, b, c, rng);
                        flat_triangle(source, &mut target, b, c, d, rng);
                    } else {
                        flat_triangle(source, &mut target, a, b, d, rng);
                        flat_triangle(source, &mut target, a, c, d, rng);
                    }
                }
                ShadingMode::Gradient => {
                    let ac = vertex_color(source, lattice, x, y);
                    let bc = vertex_color(source, lattice, x + 1, y);
                    let cc = vertex_color(source, lattice, x, y + 1);
                    let dc = vertex_color(source, lattice, x + 1, y + 1);

                    if split > 0.5 {
                        raster::fill_gradient(&mut target, a, b, c, ac, bc, cc);
                        raster::fill_gradient(&mut target, b, c, d, bc, cc, dc);
                    } else {
                        raster::fill_gradient(&mut target, a, b, d, ac, bc, dc);
                        raster::fill_gradient(&mut target, a, c, d, ac, cc, dc);
                    }
                }
            }
            cells += 1;
        }
    }

    log::debug!("rendered {} cells ({} triangles)", cells, cells * 2);
    target
}

/// Fill one triangle with the source color at a random interior point
fn flat_triangle(
    source: &Surface,
    target: &mut Surface,
    a: IVec2,
    b: IVec2,
    c: IVec2,
    rng: &mut impl Rng,
) {
    let p = raster::random_interior_point(a, b, c, rng);
    let rgb = source.sample_rgb(p.x, p.y);
    raster::fill_flat(target, a, b, c, rgb);
}

/// Vertex color for gradient shading
///
/// Normally sampled ahead of time by the grid sampler; if the lattice was
/// sampled without colors, fall back to reading the source at the point's
/// clamped position, which yields the same value.
fn vertex_color(source: &Surface, lattice: &Lattice, x: usize, y: usize) -> [u8; 3] {
    lattice.color(x, y).unwrap_or_else(|| {
        let p = lattice.point(x, y);
        source.sample_rgb(p.x, p.y)
    })
}
