//! Jittered lattice sampling
//!
//! Produces the 2D grid of sample points covering the source image from
//! which triangles are built.
//!
//! # Algorithm
//!
//! An ideally regular grid point sits at `(x * spacing, y * spacing)` for
//! each lattice index. Each point is perturbed by up to `±randomness / 2`
//! per axis, independently per axis and per point, so neighboring points
//! carry uncorrelated jitter. The lattice spans `ceil(width / spacing)` by
//! `ceil(height / spacing)` points, which means points in the last row and
//! column (or any jittered point near an edge) can land outside the image;
//! color sampling clamps those coordinates into bounds.
//!
//! In gradient shading mode each point additionally carries the source
//! pixel color at its (clamped) position, used later as gradient centers.

use glam::IVec2;
use rand::Rng;

use crate::config::{RenderConfig, ShadingMode, MIN_SPACING};
use crate::surface::Surface;

/// A 2D grid of jittered sample points, with optional per-point colors
///
/// Owned by a single generation pass and rebuilt wholesale on every
/// regeneration. Index order is significant: adjacent indices in x and y
/// are geometric neighbors and define the cells the renderer triangulates.
#[derive(Debug, Clone)]
pub struct Lattice {
    x_count: usize,
    y_count: usize,
    /// Points in x-major order: index = x * y_count + y
    points: Vec<IVec2>,
    /// Per-point source colors, present only in gradient mode
    colors: Option<Vec<[u8; 3]>>,
}

impl Lattice {
    /// Number of lattice columns
    #[inline]
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of lattice rows
    #[inline]
    pub fn y_count(&self) -> usize {
        self.y_count
    }

    /// Total number of sample points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the lattice has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at lattice index `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `x >= x_count` or `y >= y_count`.
    #[inline]
    pub fn point(&self, x: usize, y: usize) -> IVec2 {
        debug_assert!(x < self.x_count && y < self.y_count);
        self.points[x * self.y_count + y]
    }

    /// Get the vertex color at lattice index `(x, y)`
    ///
    /// Returns `None` when the lattice was sampled in flat mode.
    #[inline]
    pub fn color(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.colors
            .as_ref()
            .map(|colors| colors[x * self.y_count + y])
    }

    /// Whether per-point vertex colors were sampled
    #[inline]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }
}

/// Sample a jittered lattice covering the source image
///
/// The lattice has `ceil(width / spacing)` columns and
/// `ceil(height / spacing)` rows. Spacing and randomness are defensively
/// re-clamped so a config built by struct literal cannot cause a
/// zero-spacing iteration.
///
/// # Arguments
///
/// * `source` - Decoded source image (sampled for vertex colors in gradient mode)
/// * `config` - Generation parameters
/// * `rng` - Seeded random source; two draws are consumed per point
///
/// # Example
///
/// ```
/// use lowpoly::{sample_lattice, RenderConfig, Surface};
/// use rand::SeedableRng;
///
/// let source = Surface::filled(100, 60, [128, 128, 128]);
/// let config = RenderConfig::builder().seed(42).spacing(20).build();
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(config.seed as u64);
///
/// let lattice = sample_lattice(&source, &config, &mut rng);
/// assert_eq!(lattice.x_count(), 5);
/// assert_eq!(lattice.y_count(), 3);
/// ```
pub fn sample_lattice(source: &Surface, config: &RenderConfig, rng: &mut impl Rng) -> Lattice {
    let spacing = config.spacing.max(MIN_SPACING);
    let randomness = if config.randomness.is_finite() {
        config.randomness.max(0.0) as f64
    } else {
        0.0
    };

    let x_count = source.width().div_ceil(spacing) as usize;
    let y_count = source.height().div_ceil(spacing) as usize;
    let sample_colors = config.shading == ShadingMode::Gradient;

    let mut points = Vec::with_capacity(x_count * y_count);
    let mut colors = sample_colors.then(|| Vec::with_capacity(x_count * y_count));

    for x in 0..x_count {
        for y in 0..y_count {
            let px = jitter(x as u32 * spacing, randomness, rng);
            let py = jitter(y as u32 * spacing, randomness, rng);
            points.push(IVec2::new(px, py));

            if let Some(colors) = colors.as_mut() {
                colors.push(source.sample_rgb(px, py));
            }
        }
    }

    log::debug!(
        "sampled {}x{} lattice (spacing {}, randomness {})",
        x_count,
        y_count,
        spacing,
        randomness
    );

    Lattice {
        x_count,
        y_count,
        points,
        colors,
    }
}

/// Displace a regular grid coordinate by up to `±randomness / 2`
#[inline]
fn jitter(base: u32, randomness: f64, rng: &mut impl Rng) -> i32 {
    let u: f64 = rng.gen();
    (base as f64 + (u - 0.5) * randomness).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u32) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed as u64)
    }

    fn solid_source(width: u32, height: u32) -> Surface {
        Surface::filled(width, height, [90, 120, 150])
    }

    #[test]
    fn test_lattice_dimensions() {
        // (width, height, spacing, expected x_count, expected y_count)
        let cases = [
            (100, 60, 20, 5, 3),
            (101, 60, 20, 6, 3),
            (100, 61, 20, 5, 4),
            (7, 7, 2, 4, 4),
            (1, 1, 2, 1, 1),
        ];

        for (w, h, spacing, xc, yc) in cases {
            let config = RenderConfig::builder().seed(1).spacing(spacing).build();
            let lattice = sample_lattice(&solid_source(w, h), &config, &mut rng(1));
            assert_eq!(lattice.x_count(), xc, "x_count for {}x{}/{}", w, h, spacing);
            assert_eq!(lattice.y_count(), yc, "y_count for {}x{}/{}", w, h, spacing);
            assert_eq!(lattice.len(), xc * yc);
        }
    }

    #[test]
    fn test_zero_randomness_is_regular_grid() {
        let config = RenderConfig::builder()
            .seed(42)
            .spacing(10)
            .randomness(0.0)
            .build();
        let lattice = sample_lattice(&solid_source(50, 30), &config, &mut rng(42));

        for x in 0..lattice.x_count() {
            for y in 0..lattice.y_count() {
                assert_eq!(
                    lattice.point(x, y),
                    IVec2::new(x as i32 * 10, y as i32 * 10)
                );
            }
        }
    }

    #[test]
    fn test_jitter_bounded() {
        let config = RenderConfig::builder()
            .seed(7)
            .spacing(10)
            .randomness(8.0)
            .build();
        let lattice = sample_lattice(&solid_source(100, 100), &config, &mut rng(7));

        for x in 0..lattice.x_count() {
            for y in 0..lattice.y_count() {
                let p = lattice.point(x, y);
                let dx = p.x - x as i32 * 10;
                let dy = p.y - y as i32 * 10;
                // floor() can push the displacement one below -randomness/2
                assert!((-5..=4).contains(&dx), "dx {} out of range", dx);
                assert!((-5..=4).contains(&dy), "dy {} out of range", dy);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let config = RenderConfig::builder().seed(42).spacing(12).build();
        let source = solid_source(90, 70);

        let a = sample_lattice(&source, &config, &mut rng(42));
        let b = sample_lattice(&source, &config, &mut rng(42));

        assert_eq!(a.len(), b.len());
        for x in 0..a.x_count() {
            for y in 0..a.y_count() {
                assert_eq!(a.point(x, y), b.point(x, y));
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = RenderConfig::builder().seed(1).spacing(12).build();
        let source = solid_source(90, 70);

        let a = sample_lattice(&source, &config, &mut rng(12345));
        let b = sample_lattice(&source, &config, &mut rng(67890));

        // Same dimensions regardless of seed
        assert_eq!(a.x_count(), b.x_count());
        assert_eq!(a.y_count(), b.y_count());

        let any_different = (0..a.x_count()).any(|x| {
            (0..a.y_count()).any(|y| a.point(x, y) != b.point(x, y))
        });
        assert!(any_different, "different seeds should jitter differently");
    }

    #[test]
    fn test_flat_mode_has_no_colors() {
        let config = RenderConfig::builder()
            .seed(3)
            .shading(ShadingMode::Flat)
            .build();
        let lattice = sample_lattice(&solid_source(40, 40), &config, &mut rng(3));
        assert!(!lattice.has_colors());
        assert_eq!(lattice.color(0, 0), None);
    }

    #[test]
    fn test_gradient_mode_samples_colors() {
        let config = RenderConfig::builder()
            .seed(3)
            .spacing(10)
            .randomness(20.0)
            .shading(ShadingMode::Gradient)
            .build();
        let source = solid_source(40, 40);
        let lattice = sample_lattice(&source, &config, &mut rng(3));

        assert!(lattice.has_colors());
        for x in 0..lattice.x_count() {
            for y in 0..lattice.y_count() {
                // Every sample comes from the solid source, even the ones
                // whose jittered point fell outside the image
                assert_eq!(lattice.color(x, y), Some([90, 120, 150]));
            }
        }
    }

    #[test]
    fn test_gradient_colors_match_source_pixels() {
        let mut source = Surface::filled(20, 20, [0, 0, 0]);
        for x in 0..20 {
            for y in 0..20 {
                source.put(x, y, image::Rgba([x as u8 * 10, y as u8 * 10, 0, 255]));
            }
        }

        let config = RenderConfig::builder()
            .seed(9)
            .spacing(6)
            .randomness(4.0)
            .shading(ShadingMode::Gradient)
            .build();
        let lattice = sample_lattice(&source, &config, &mut rng(9));

        for x in 0..lattice.x_count() {
            for y in 0..lattice.y_count() {
                let p = lattice.point(x, y);
                assert_eq!(lattice.color(x, y), Some(source.sample_rgb(p.x, p.y)));
            }
        }
    }

    #[test]
    fn test_unclamped_config_is_reclamped() {
        // Struct-literal config bypasses the builder clamps
        let config = RenderConfig {
            seed: 5,
            spacing: 0,
            randomness: -4.0,
            shading: ShadingMode::Flat,
        };
        let lattice = sample_lattice(&solid_source(10, 10), &config, &mut rng(5));

        // spacing treated as 2, randomness as 0
        assert_eq!(lattice.x_count(), 5);
        assert_eq!(lattice.y_count(), 5);
        assert_eq!(lattice.point(1, 1), IVec2::new(2, 2));
    }
}
