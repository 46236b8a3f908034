use log::{debug, trace};

use crate::color::{Color, Level};
use crate::config::ConnectorOptions;
use crate::error::{ConnectorError, Result};
use crate::metadata::{ChannelSupport, FixtureKind, Metadata, SourceSupport, Support};
use crate::transport::{SpiTransport, SpidevTransport};

/// What a render call did with the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// State had changed; one full frame was written
    Transmitted,
    /// Nothing changed since the last transmit; no I/O
    Skipped,
}

/// Connector for a WS2801-family LED strand on a 2-wire SPI bus
///
/// Holds per-pixel color and brightness state for a fixed-length strand and
/// pushes a level-scaled byte frame to the transport whenever the state has
/// changed since the last transmit. The host framework calls `render` once per
/// frame; everything here is synchronous and single-threaded.
pub struct Ws2801Connector<T: SpiTransport> {
    transport: T,
    /// Flattened (r, g, b) channel bytes, 3 per pixel
    colors: Vec<u8>,
    /// Brightness multiplier per pixel
    levels: Vec<f32>,
    dirty: bool,
    frames_written: u64,
    animation: Option<String>,
}

impl Ws2801Connector<SpidevTransport> {
    /// Open the SPI device named in the options and build a connector on it
    pub fn open(options: &ConnectorOptions) -> Result<Self> {
        options.validate()?;
        let transport = SpidevTransport::open(&options.device)?;
        Self::with_transport(options.count, transport)
    }
}

impl<T: SpiTransport> Ws2801Connector<T> {
    /// Build a connector for `count` pixels on an already-open transport
    ///
    /// The strand starts fully on and black, applied through the public
    /// mutators, so a fresh connector is dirty and the first render transmits.
    pub fn with_transport(count: usize, transport: T) -> Result<Self> {
        if count == 0 {
            return Err(ConnectorError::InvalidOptions(
                "pixel count must be positive".to_string(),
            ));
        }

        let mut connector = Ws2801Connector {
            transport,
            colors: vec![0; count * 3],
            levels: vec![0.0; count],
            dirty: false,
            frames_written: 0,
            animation: None,
        };

        connector.set_level(Level::Value(1.0), None, None);
        connector.set_color(Color::rgb(0, 0, 0), None, None)?;

        Ok(connector)
    }

    /// Static descriptor for capability discovery
    pub fn metadata() -> Metadata {
        Metadata {
            name: "WS2801 SPI Connector",
            description: "Connector for communicating with WS2801-like LED strands over 2-wire SPI",
            kind: FixtureKind::Light,
            support: Support {
                source: SourceSupport::Multi,
                level: ChannelSupport::Omni,
                color: ChannelSupport::Omni,
            },
        }
    }

    /// Number of pixels on the strand
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        false // count is validated positive at construction
    }

    /// Whether in-memory state differs from the last-transmitted frame
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Frames actually written to the transport so far
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Render the current state into the fixture
    ///
    /// Writes one full level-scaled frame if anything changed since the last
    /// transmit, otherwise performs no I/O. Returning is the completion signal
    /// to the calling scheduler; there is exactly one write or none per call.
    pub fn render(&mut self, frame: u64, delta_ms: u64) -> Result<RenderOutcome> {
        if !self.dirty {
            trace!("frame {}: state clean, skipping transmit", frame);
            return Ok(RenderOutcome::Skipped);
        }

        let buffer = self.compose_frame();
        self.transport.write_frame(&buffer)?;
        self.dirty = false;
        self.frames_written += 1;

        debug!(
            "frame {}: transmitted {} bytes ({} ms since previous frame)",
            frame,
            buffer.len(),
            delta_ms
        );

        Ok(RenderOutcome::Transmitted)
    }

    /// Set the brightness of a pixel range
    ///
    /// `start` defaults to 0 and `end` to the strand length. Marks the state
    /// dirty even when the resulting window is empty.
    pub fn set_level(&mut self, level: Level, start: Option<usize>, end: Option<usize>) {
        self.dirty = true;

        let factor = level.factor();
        for i in self.window(start, end, self.levels.len()) {
            self.levels[i] = factor;
        }
    }

    /// Set the color of a pixel range
    ///
    /// Only full RGB values are accepted; a named color fails with
    /// `UnsupportedColorMode` and leaves the buffers untouched. Range defaults
    /// and dirty behavior match `set_level`.
    pub fn set_color(&mut self, color: Color, start: Option<usize>, end: Option<usize>) -> Result<()> {
        let (r, g, b) = match color {
            Color::Rgb { r, g, b } => (r, g, b),
            Color::Named { .. } => return Err(ConnectorError::UnsupportedColorMode),
        };

        self.dirty = true;

        for i in self.window(start, end, self.levels.len()) {
            self.colors[i * 3] = r;
            self.colors[i * 3 + 1] = g;
            self.colors[i * 3 + 2] = b;
        }

        Ok(())
    }

    /// Set the animation for the fixture
    ///
    /// Animation playback has never been wired up; every call fails. The
    /// dirty mark before the failure is long-standing connector behavior and
    /// only costs a retransmit of an unchanged frame.
    pub fn set_animation(&mut self, _animation: &str) -> Result<()> {
        self.dirty = true;

        Err(ConnectorError::NotImplemented("animation playback"))
    }

    /// Currently playing animation, if any
    pub fn animation(&self) -> Option<&str> {
        self.animation.as_deref()
    }

    /// Absolute pixel indices touched by a range request
    ///
    /// The loop bound is `end - start` while the index itself starts at
    /// `start`, so the touched window is `[start, end - start)`; it equals the
    /// conventional `[start, end)` only when `start` is 0. Fixture configs in
    /// the field depend on this exact window, so it is kept as-is; the bound
    /// is additionally clamped to the strand length.
    fn window(&self, start: Option<usize>, end: Option<usize>, len: usize) -> std::ops::Range<usize> {
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(len);
        let bound = end.saturating_sub(start).min(len);

        // An inverted range (start >= bound) iterates zero indices.
        start..bound
    }

    /// Level-scaled transmit buffer, composed fresh from current state
    fn compose_frame(&self) -> Vec<u8> {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &channel)| (f32::from(channel) * self.levels[i / 3]) as u8)
            .collect()
    }
}
