//! Connector for driving WS2801-family addressable LED strands over 2-wire SPI.
//!
//! A host lighting framework constructs one connector per strand, mutates the
//! per-pixel color and level state between frames, and calls [`Ws2801Connector::render`]
//! once per frame. The connector composes a level-scaled byte frame and pushes
//! it to the SPI transport only when state has changed since the last transmit.

mod color;
mod config;
mod connector;
mod error;
mod metadata;
mod transport;

pub use color::{Color, Level};
pub use config::ConnectorOptions;
pub use connector::{RenderOutcome, Ws2801Connector};
pub use error::{ConnectorError, Result};
pub use metadata::{ChannelSupport, FixtureKind, Metadata, SourceSupport, Support};
pub use transport::{SpiTransport, SpidevTransport};
