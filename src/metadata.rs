use serde::Serialize;

/// Connector descriptor consumed by the host framework for capability discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: FixtureKind,
    pub support: Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Light,
}

/// Capability flags: how many simultaneous inputs the fixture accepts and how
/// finely level and color can be addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Support {
    pub source: SourceSupport,
    pub level: ChannelSupport,
    pub color: ChannelSupport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSupport {
    Single,
    Multi,
}

/// Per-pixel ("omni") versus fixed/named-only channel control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSupport {
    Omni,
    Named,
}

#[cfg(test)]
mod tests {
    use crate::connector::Ws2801Connector;
    use crate::transport::SpidevTransport;

    #[test]
    fn test_metadata_json_shape() {
        let json = serde_json::to_value(Ws2801Connector::<SpidevTransport>::metadata()).unwrap();
        assert_eq!(json["type"], "light");
        assert_eq!(json["support"]["source"], "multi");
        assert_eq!(json["support"]["level"], "omni");
        assert_eq!(json["support"]["color"], "omni");
    }
}
