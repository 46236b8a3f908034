use std::io;

use thiserror::Error;

/// Errors surfaced by the connector to the host framework
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// A named/palette color was passed to a full-RGB fixture
    #[error("this is an omnicolor fixture that cannot display named colors")]
    UnsupportedColorMode,

    /// The requested capability exists in the contract but has no implementation
    #[error("{0} is not currently implemented")]
    NotImplemented(&'static str),

    /// Construction options that cannot produce a usable strand
    #[error("invalid connector options: {0}")]
    InvalidOptions(String),

    /// The SPI device node could not be opened at construction
    #[error("failed to open SPI device {path}: {source}")]
    DeviceOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The underlying SPI transport failed mid-frame
    #[error("SPI transport error: {0}")]
    Transport(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
