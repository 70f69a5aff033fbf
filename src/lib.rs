//! Low-poly triangulated stylization of raster images
//!
//! Converts a decoded raster image into a stylized low-poly rendition:
//! a jittered lattice of sample points is laid over the image, every 2x2
//! cell is split into two triangles along a random diagonal, and each
//! triangle is painted either with one flat color sampled at a random
//! interior point or with three blended radial gradients centered at its
//! vertices. The result is exportable as a PNG buffer.
//!
//! # Quick Start
//!
//! ```rust
//! use lowpoly::*;
//!
//! // Any decoded image works; here, a solid surface
//! let source = Surface::filled(128, 128, [180, 120, 60]);
//! let mut session = RenderSession::new(source);
//!
//! let config = RenderConfig::builder()
//!     .seed(42)
//!     .spacing(20)
//!     .randomness(10.0)
//!     .shading(ShadingMode::Gradient)
//!     .build();
//!
//! let result = session.generate(&config).unwrap();
//! println!(
//!     "pass {} took {} ms, frame is {}",
//!     result.sequence,
//!     result.elapsed_ms(),
//!     session.last_frame().unwrap().readable_size()
//! );
//! ```
//!
//! # Determinism
//!
//! All randomness (point jitter, diagonal choice, interior color sampling)
//! comes from a ChaCha RNG seeded by [`RenderConfig::seed`], so the same
//! config and source always reproduce a byte-identical frame.
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration types

// Modules
pub mod error;
pub mod config;
pub mod format;
pub mod surface;
pub mod lattice;
pub mod render;
pub mod session;

// Re-export core types for convenience
pub use error::{LowPolyError, Result};
pub use config::{RenderConfig, RenderConfigBuilder, ShadingMode, MIN_SPACING};
pub use surface::Surface;
pub use lattice::{sample_lattice, Lattice};
pub use render::{render, GRADIENT_RADIUS};
pub use session::{EncodedFrame, RenderResult, RenderSession, EXPORT_FILENAME};
