use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::{ConnectorError, Result};

/// Byte sink for one strand of pixels
///
/// One call transmits one complete frame of `3 * count` channel bytes in
/// strand order. WS2801 chips latch on clock idle, so there is no framing
/// protocol on top of the raw bytes and nothing is ever read back.
pub trait SpiTransport {
    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()>;
}

/// Transport backed by a Linux SPI character device (`/dev/spidevB.C`)
///
/// The kernel spidev driver accepts plain writes for half-duplex output, which
/// is all a WS2801 strand needs; bus speed and mode are left at the device
/// defaults.
pub struct SpidevTransport {
    device: File,
    path: String,
}

impl SpidevTransport {
    /// Open the SPI device node for writing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let device = OpenOptions::new()
            .write(true)
            .open(path.as_ref())
            .map_err(|source| ConnectorError::DeviceOpen {
                path: path_str.clone(),
                source,
            })?;

        info!("opened SPI device {}", path_str);

        Ok(SpidevTransport {
            device,
            path: path_str,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl SpiTransport for SpidevTransport {
    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()> {
        // write_all so a frame is never partially clocked out
        self.device.write_all(frame)?;
        self.device.flush()
    }
}

#[cfg(test)]
pub mod mock {
    use super::SpiTransport;

    /// Records every transmitted frame for inspection
    #[derive(Default)]
    pub struct MockTransport {
        pub frames: Vec<Vec<u8>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SpiTransport for MockTransport {
        fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()> {
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }
}
