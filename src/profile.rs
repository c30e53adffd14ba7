use once_cell::sync::OnceCell;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Profile of a known hardware variant.
///
/// Associates the identifier strings a device reports at runtime with the
/// names of its network interfaces. All data is fixed at definition time;
/// profiles are never constructed or modified at runtime.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DeviceProfile {
    /// Human-readable device model label.
    pub model: &'static str,
    /// Identifier strings reported by this hardware. Different firmware
    /// revisions report different identifiers for the same device, so a
    /// profile may carry several aliases.
    pub names: &'static [&'static str],
    /// Interface name of the cellular radio, if any.
    pub cell: Option<&'static str>,
    /// Interface name of the WiFi radio, if any.
    pub wifi: Option<&'static str>,
    /// Interface name of the bluetooth adapter, if any.
    pub bluetooth: Option<&'static str>,
    #[cfg_attr(feature = "serde", serde(skip))]
    iface_cache: OnceCell<Vec<&'static str>>,
}

impl DeviceProfile {
    pub(crate) const fn new(
        model: &'static str,
        names: &'static [&'static str],
        cell: Option<&'static str>,
        wifi: Option<&'static str>,
        bluetooth: Option<&'static str>,
    ) -> DeviceProfile {
        DeviceProfile {
            model,
            names,
            cell,
            wifi,
            bluetooth,
            iface_cache: OnceCell::new(),
        }
    }

    /// Returns true if `device_id` is one of this profile's identifiers.
    /// Comparison is exact and case-sensitive.
    pub fn matches(&self, device_id: &str) -> bool {
        self.names.iter().any(|name| *name == device_id)
    }

    /// Returns the names of this profile's network interfaces, in fixed
    /// order: cell, wifi, bluetooth. Absent interfaces are skipped and
    /// duplicate names appear once (the emulator profile aliases cell to
    /// the wifi interface). The list is built on first access and cached
    /// for the lifetime of the profile.
    pub fn interfaces(&self) -> &[&'static str] {
        self.iface_cache.get_or_init(|| {
            let mut ifaces: Vec<&'static str> = Vec::new();
            for name in [self.cell, self.wifi, self.bluetooth].into_iter().flatten() {
                if !ifaces.contains(&name) {
                    ifaces.push(name);
                }
            }
            ifaces
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_order() {
        let profile = DeviceProfile::new(
            "test",
            &["test"],
            Some("rmnet0"),
            Some("eth0"),
            Some("bnep0"),
        );
        assert_eq!(profile.interfaces(), &["rmnet0", "eth0", "bnep0"]);
    }

    #[test]
    fn test_absent_interfaces_skipped() {
        let profile = DeviceProfile::new("test", &["test"], None, Some("wlan0"), None);
        assert_eq!(profile.interfaces(), &["wlan0"]);
    }

    #[test]
    fn test_duplicate_interfaces_collapsed() {
        let profile = DeviceProfile::new("test", &["test"], Some("eth0"), Some("eth0"), None);
        assert_eq!(profile.interfaces(), &["eth0"]);
    }

    #[test]
    fn test_interfaces_memoized() {
        let profile = DeviceProfile::new("test", &["test"], Some("ppp0"), None, Some("bnep0"));
        let first = profile.interfaces().as_ptr();
        let second = profile.interfaces().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_is_exact() {
        let profile = DeviceProfile::new("test", &["GT-I7500", "spica"], Some("pdp0"), None, None);
        assert!(profile.matches("GT-I7500"));
        assert!(profile.matches("spica"));
        assert!(!profile.matches("gt-i7500"));
        assert!(!profile.matches("spic"));
    }
}
