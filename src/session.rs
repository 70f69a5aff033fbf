//! Generation session and export
//!
//! [`RenderSession`] owns the decoded source image, the last encoded PNG
//! frame, and the generation sequence counter. Each call to
//! [`RenderSession::generate`] runs one full pass (lattice sampling, all
//! triangle draws, PNG encode) and replaces the previous frame wholesale.
//!
//! Frames carry the sequence number of the pass that produced them, and
//! [`RenderSession::commit_frame`] discards any frame that is not the
//! latest requested pass. Encoding happens synchronously here, but the
//! guard keeps a host that encodes off-thread from overwriting a newer
//! result with a stale one.

use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::format::to_readable_size;
use crate::lattice::sample_lattice;
use crate::render::render;
use crate::surface::Surface;

/// Default filename used when exporting a frame
pub const EXPORT_FILENAME: &str = "convert.png";

/// An encoded PNG frame tagged with its generation sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    /// Sequence number of the pass that produced this frame
    pub sequence: u64,
    /// PNG-encoded image bytes
    pub bytes: Vec<u8>,
}

impl EncodedFrame {
    /// Human-readable size of the encoded buffer, e.g. `"24.3 kB"`
    pub fn readable_size(&self) -> String {
        to_readable_size(self.bytes.len() as u64)
    }
}

/// Result of one generation pass
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered pixel surface
    pub surface: Surface,
    /// Wall-clock time from just before lattice sampling to the last
    /// triangle draw
    pub elapsed: Duration,
    /// Sequence number of this pass
    pub sequence: u64,
}

impl RenderResult {
    /// Elapsed generation time in whole milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// A generation session bound to one source image
///
/// # Example
///
/// ```
/// use lowpoly::{RenderConfig, RenderSession, Surface};
///
/// let source = Surface::filled(64, 64, [200, 120, 40]);
/// let mut session = RenderSession::new(source);
///
/// let config = RenderConfig::builder().seed(42).spacing(16).build();
/// let result = session.generate(&config).unwrap();
///
/// assert_eq!(result.sequence, 1);
/// assert!(session.last_frame().is_some());
/// ```
pub struct RenderSession {
    source: Surface,
    sequence: u64,
    frame: Option<EncodedFrame>,
}

impl RenderSession {
    /// Create a session for an already-decoded source surface
    pub fn new(source: Surface) -> Self {
        Self {
            source,
            sequence: 0,
            frame: None,
        }
    }

    /// Open an image file and create a session for it
    ///
    /// Any format supported by the enabled `image` decoders works.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path)?;
        Ok(Self::new(Surface::from_image(&image)))
    }

    /// The decoded source image
    #[inline]
    pub fn source(&self) -> &Surface {
        &self.source
    }

    /// Sequence number of the most recently requested pass
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The last committed encoded frame, if any pass has completed
    #[inline]
    pub fn last_frame(&self) -> Option<&EncodedFrame> {
        self.frame.as_ref()
    }

    /// Run one full generation pass
    ///
    /// Samples a fresh lattice, draws all triangles onto a copy of the
    /// source, encodes the result to PNG, and commits it as the latest
    /// frame. The RNG is seeded from the config, so the same config always
    /// produces a byte-identical frame.
    pub fn generate(&mut self, config: &RenderConfig) -> Result<RenderResult> {
        self.sequence += 1;
        let sequence = self.sequence;

        let start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);
        let lattice = sample_lattice(&self.source, config, &mut rng);
        let surface = render(&self.source, &lattice, config, &mut rng);
        let elapsed = start.elapsed();

        let bytes = surface.encode_png()?;
        let frame = EncodedFrame { sequence, bytes };
        log::debug!(
            "pass {} finished in {} ms ({})",
            sequence,
            elapsed.as_millis(),
            frame.readable_size()
        );
        self.commit_frame(frame);

        Ok(RenderResult {
            surface,
            elapsed,
            sequence,
        })
    }

    /// Commit an encoded frame, discarding it if it is stale
    ///
    /// A frame is stale when its sequence number is not the latest
    /// requested pass. Returns whether the frame was kept.
    pub fn commit_frame(&mut self, frame: EncodedFrame) -> bool {
        if frame.sequence != self.sequence {
            log::debug!(
                "discarding stale frame {} (latest pass is {})",
                frame.sequence,
                self.sequence
            );
            return false;
        }
        self.frame = Some(frame);
        true
    }

    /// Write the last frame to `path`
    ///
    /// A session with no generated frame silently does nothing and returns
    /// `Ok(false)`, matching the export button being a no-op before the
    /// first generation.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<bool> {
        match &self.frame {
            Some(frame) => {
                std::fs::write(path, &frame.bytes)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
