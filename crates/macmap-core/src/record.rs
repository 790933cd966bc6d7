//! Records extracted from the two captures.
//!
//! All fields are kept as the text the device printed. MAC addresses and
//! VLANs are not re-validated; the only interpretation applied is the OUI
//! key derived for vendor lookup.

use macmap_types::Oui;
use serde::{Deserialize, Serialize};

/// One dynamic entry of the MAC address table.
///
/// A port may own any number of these (hub, phone with a PC behind it,
/// trunk uplink).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacTableRecord {
    pub port: String,
    pub mac_address: String,
    pub vlan: String,
}

impl MacTableRecord {
    pub fn new(
        port: impl Into<String>,
        mac_address: impl Into<String>,
        vlan: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            mac_address: mac_address.into(),
            vlan: vlan.into(),
        }
    }

    /// Vendor lookup key, or `None` if the MAC text is not a 48-bit address.
    pub fn vendor_key(&self) -> Option<Oui> {
        Oui::from_mac_text(&self.mac_address).ok()
    }
}

/// One row of the interface status table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceStatusRecord {
    pub port: String,
    /// Link state token, e.g. `connected`, `notconnect`, `disabled`.
    pub state: String,
    /// VLAN id or a mode token such as `trunk` or `routed`. Empty when the
    /// device output was truncated before the VLAN column.
    pub vlan: String,
}

impl InterfaceStatusRecord {
    pub fn new(port: impl Into<String>, state: impl Into<String>, vlan: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            state: state.into(),
            vlan: vlan.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vendor_key_from_cisco_mac() {
        let record = MacTableRecord::new("Gi1/0/1", "0050.56ab.cdef", "10");
        assert_eq!(record.vendor_key(), Some(Oui::new([0x00, 0x50, 0x56])));
    }

    #[test]
    fn test_vendor_key_absent_for_odd_mac_text() {
        let record = MacTableRecord::new("Gi1/0/1", "incomplete", "10");
        assert_eq!(record.vendor_key(), None);
    }
}
