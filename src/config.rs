//! Render configuration and builder
//!
//! Configuration for deterministic low-poly generation. The same
//! configuration applied to the same source image always produces an
//! identical rendition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest allowed lattice spacing in pixels
///
/// Spacing below 2 would degenerate the lattice into per-pixel cells and
/// divide-by-zero territory; out-of-range values are clamped here rather
/// than rejected.
pub const MIN_SPACING: u32 = 2;

/// How each triangle is colored
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Fill the triangle with one color sampled at a random interior point
    #[default]
    Flat,
    /// Blend three additive radial gradients centered at the vertices
    Gradient,
}

impl ShadingMode {
    /// Get a human-readable name for this shading mode
    pub fn name(self) -> &'static str {
        match self {
            ShadingMode::Flat => "Flat",
            ShadingMode::Gradient => "Gradient",
        }
    }
}

/// Configuration for one generation pass
///
/// Serializable (with the `serde` feature) so a rendition can be reproduced
/// from its parameters alone; rendered surfaces are never persisted.
///
/// # Example
///
/// ```
/// use lowpoly::{RenderConfig, ShadingMode};
///
/// let config = RenderConfig::builder()
///     .seed(42)
///     .spacing(20)
///     .randomness(10.0)
///     .shading(ShadingMode::Gradient)
///     .build();
///
/// assert_eq!(config.spacing, 20);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Random seed driving point jitter, diagonal choice, and interior
    /// color sampling
    pub seed: u32,

    /// Ideal distance in pixels between adjacent lattice points
    ///
    /// Always at least [`MIN_SPACING`]. The UI seam additionally caps this
    /// at `min(width, height)` of the loaded image.
    pub spacing: u32,

    /// Maximum total jitter applied to each lattice point
    ///
    /// Each point is displaced by up to `±randomness / 2` per axis,
    /// independently per axis and per point. Always finite and >= 0.
    pub randomness: f32,

    /// Triangle shading strategy
    pub shading: ShadingMode,
}

impl RenderConfig {
    /// Create a builder with default values
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Return a copy with out-of-range values clamped into the valid domain
    ///
    /// The builder already clamps; this exists for configs constructed
    /// directly by struct literal.
    pub fn clamped(mut self) -> Self {
        self.spacing = self.spacing.max(MIN_SPACING);
        self.randomness = clamp_randomness(self.randomness);
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfigBuilder::new().build()
    }
}

/// NaN is treated as "no jitter", matching the clamp-not-reject policy for
/// non-numeric UI input.
fn clamp_randomness(randomness: f32) -> f32 {
    if randomness.is_finite() {
        randomness.max(0.0)
    } else {
        0.0
    }
}

/// Builder for [`RenderConfig`]
///
/// Setters clamp rather than reject: a spacing of 0 becomes
/// [`MIN_SPACING`], negative randomness becomes 0. This mirrors how the
/// numeric inputs at the UI seam behave.
///
/// # Example
///
/// ```
/// use lowpoly::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .seed(7)
///     .spacing(0) // clamped to 2
///     .randomness(-3.0) // clamped to 0
///     .build();
///
/// assert_eq!(config.spacing, 2);
/// assert_eq!(config.randomness, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
    seed: Option<u32>,
    spacing: u32,
    randomness: f32,
    shading: ShadingMode,
}

impl RenderConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random (generated from `rand::random`)
    /// - spacing: 20 pixels
    /// - randomness: 10.0 pixels
    /// - shading: Flat
    pub fn new() -> Self {
        Self {
            seed: None,
            spacing: 20,
            randomness: 10.0,
            shading: ShadingMode::default(),
        }
    }

    /// Set the random seed
    ///
    /// The same seed with the same other parameters and source image will
    /// reproduce the exact same lattice, triangle splits, and colors.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the lattice spacing in pixels (clamped to >= [`MIN_SPACING`])
    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing.max(MIN_SPACING);
        self
    }

    /// Set the jitter amount in pixels (clamped to >= 0, NaN becomes 0)
    pub fn randomness(mut self, randomness: f32) -> Self {
        self.randomness = clamp_randomness(randomness);
        self
    }

    /// Set the triangle shading mode
    pub fn shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random one.
    pub fn build(self) -> RenderConfig {
        RenderConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            spacing: self.spacing,
            randomness: self.randomness,
            shading: self.shading,
        }
    }
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = RenderConfig::builder().build();
        assert_eq!(config.spacing, 20);
        assert_eq!(config.randomness, 10.0);
        assert_eq!(config.shading, ShadingMode::Flat);
        let _seed = config.seed; // seed is random, just verify it was set
    }

    #[test]
    fn test_builder_custom() {
        let config = RenderConfig::builder()
            .seed(42)
            .spacing(35)
            .randomness(12.5)
            .shading(ShadingMode::Gradient)
            .build();

        assert_eq!(config.seed, 42);
        assert_eq!(config.spacing, 35);
        assert_eq!(config.randomness, 12.5);
        assert_eq!(config.shading, ShadingMode::Gradient);
    }

    #[test]
    fn test_spacing_clamped() {
        assert_eq!(RenderConfig::builder().spacing(0).build().spacing, 2);
        assert_eq!(RenderConfig::builder().spacing(1).build().spacing, 2);
        assert_eq!(RenderConfig::builder().spacing(2).build().spacing, 2);
        assert_eq!(RenderConfig::builder().spacing(100).build().spacing, 100);
    }

    #[test]
    fn test_randomness_clamped() {
        assert_eq!(RenderConfig::builder().randomness(-5.0).build().randomness, 0.0);
        assert_eq!(RenderConfig::builder().randomness(0.0).build().randomness, 0.0);
        assert_eq!(
            RenderConfig::builder().randomness(f32::NAN).build().randomness,
            0.0
        );
    }

    #[test]
    fn test_clamped_struct_literal() {
        let config = RenderConfig {
            seed: 1,
            spacing: 0,
            randomness: -1.0,
            shading: ShadingMode::Flat,
        }
        .clamped();

        assert_eq!(config.spacing, MIN_SPACING);
        assert_eq!(config.randomness, 0.0);
    }

    #[test]
    fn test_shading_mode_names() {
        assert_eq!(ShadingMode::Flat.name(), "Flat");
        assert_eq!(ShadingMode::Gradient.name(), "Gradient");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = RenderConfig::builder()
            .seed(12345)
            .spacing(16)
            .shading(ShadingMode::Gradient)
            .build();

        let json = serde_json::to_string(&config).unwrap();
        let restored: RenderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
