//! Port classification for switch interface names.

use serde::{Deserialize, Serialize};

/// Interface name prefix used by port-channel (LAG) interfaces.
const PORT_CHANNEL_PREFIX: &str = "Po";

/// Kind of switch interface, derived from its name.
///
/// Only the distinction that changes how `show interfaces status` columns
/// line up is modelled: port-channels versus everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortKind {
    /// Physical (or slot/port addressed) interface such as `Gi1/0/1`.
    #[default]
    Physical,
    /// Link aggregation group such as `Po1`.
    PortChannel,
}

impl PortKind {
    /// Classifies an interface name.
    ///
    /// Matching is case sensitive: `Po1` is a port-channel, `po1` and
    /// `Gi1/0/1` are not.
    pub fn of(port: &str) -> Self {
        if port.starts_with(PORT_CHANNEL_PREFIX) {
            PortKind::PortChannel
        } else {
            PortKind::Physical
        }
    }

    /// Returns true if this is a port-channel.
    pub const fn is_port_channel(&self) -> bool {
        matches!(self, PortKind::PortChannel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_port_names() {
        assert_eq!(PortKind::of("Po1"), PortKind::PortChannel);
        assert_eq!(PortKind::of("Po10"), PortKind::PortChannel);
        assert_eq!(PortKind::of("Gi1/0/1"), PortKind::Physical);
        assert_eq!(PortKind::of("Te1/1/1"), PortKind::Physical);
        assert_eq!(PortKind::of("po1"), PortKind::Physical);
        assert_eq!(PortKind::of(""), PortKind::Physical);
    }

    #[test]
    fn test_is_port_channel() {
        assert!(PortKind::PortChannel.is_port_channel());
        assert!(!PortKind::Physical.is_port_channel());
    }
}
