//! Vendor resolution seam.

use macmap_types::Oui;

/// Resolves an OUI to a vendor name.
///
/// Unknown prefixes return `None`; that is normal for locally administered
/// and unregistered addresses.
pub trait VendorLookup {
    fn vendor(&self, oui: &Oui) -> Option<&str>;

    /// Vendor for an optional key, empty string when unknown.
    fn vendor_or_blank(&self, oui: Option<&Oui>) -> &str {
        oui.and_then(|oui| self.vendor(oui)).unwrap_or("")
    }
}

/// Lookup that never resolves; used when no OUI table is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVendorLookup;

impl VendorLookup for NoVendorLookup {
    fn vendor(&self, _oui: &Oui) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneVendor;

    impl VendorLookup for OneVendor {
        fn vendor(&self, oui: &Oui) -> Option<&str> {
            (*oui == Oui::new([0x00, 0x50, 0x56])).then_some("VMware, Inc.")
        }
    }

    #[test]
    fn test_vendor_or_blank() {
        let known = Oui::new([0x00, 0x50, 0x56]);
        let unknown = Oui::new([0x02, 0x00, 0x00]);
        assert_eq!(OneVendor.vendor_or_blank(Some(&known)), "VMware, Inc.");
        assert_eq!(OneVendor.vendor_or_blank(Some(&unknown)), "");
        assert_eq!(OneVendor.vendor_or_blank(None), "");
    }

    #[test]
    fn test_no_vendor_lookup() {
        assert_eq!(NoVendorLookup.vendor(&Oui::new([0x00, 0x50, 0x56])), None);
    }
}
