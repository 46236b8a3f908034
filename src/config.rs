use serde::{Deserialize, Serialize};

use crate::error::{ConnectorError, Result};

/// Construction options handed over by the host framework
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectorOptions {
    /// SPI device node the strand is wired to, e.g. "/dev/spidev0.0"
    pub device: String,
    /// Number of pixels on the strand
    pub count: usize,
}

impl ConnectorOptions {
    pub fn new(device: impl Into<String>, count: usize) -> Self {
        ConnectorOptions {
            device: device.into(),
            count,
        }
    }

    /// Reject option sets that cannot produce a usable strand
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(ConnectorError::InvalidOptions(
                "pixel count must be positive".to_string(),
            ));
        }
        if self.device.is_empty() {
            return Err(ConnectorError::InvalidOptions(
                "SPI device path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let options: ConnectorOptions =
            serde_json::from_str(r#"{"device": "/dev/spidev0.0", "count": 32}"#).unwrap();
        assert_eq!(options.device, "/dev/spidev0.0");
        assert_eq!(options.count, 32);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let options = ConnectorOptions::new("/dev/spidev0.0", 0);
        assert!(matches!(
            options.validate(),
            Err(ConnectorError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_empty_device_rejected() {
        let options = ConnectorOptions::new("", 16);
        assert!(options.validate().is_err());
    }
}
