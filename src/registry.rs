use crate::profile::DeviceProfile;

/// All the devices we know about. Declaration order is match priority and
/// the first entry doubles as the fallback for unknown identifiers.
static PROFILES: [DeviceProfile; 6] = [
    DeviceProfile::new(
        "HTC Dream/Magic",
        &["dream"],
        Some("rmnet0"),
        Some("tiwlan0"),
        None,
    ),
    // Emulator. Cell carries the wifi interface name for debugging purposes.
    DeviceProfile::new("Android emulator", &["generic"], Some("eth0"), Some("eth0"), None),
    DeviceProfile::new(
        "Samsung Galaxy GT-I7500/I5700",
        &["GT-I7500", "spica"],
        Some("pdp0"),
        Some("eth0"),
        Some("bnep0"),
    ),
    DeviceProfile::new(
        "T-Mobile Pulse / Nexus One",
        &["U8220", "passion"],
        Some("rmnet0"),
        Some("eth0"),
        Some("bnep0"),
    ),
    DeviceProfile::new(
        "Motorola Droid",
        &["sholes"],
        Some("ppp0"),
        Some("tiwlan0"),
        Some("bnep0"),
    ),
    DeviceProfile::new(
        "LG Eve GW620R",
        &["EVE"],
        Some("rmnet0"),
        Some("wlan0"),
        Some("bnep0"),
    ),
];

/// Get the list of known device profiles, in match priority order.
pub fn profiles() -> &'static [DeviceProfile] {
    &PROFILES
}

/// Get the default device profile, used when no identifier matches.
pub fn default_profile() -> &'static DeviceProfile {
    &PROFILES[0]
}

/// Look up the profile for the given device identifier.
///
/// Scans the profile table in order and returns the first profile whose
/// identifier list contains `device_id`. An unknown identifier is not an
/// error; it falls back to the default profile.
pub fn lookup_profile(device_id: &str) -> &'static DeviceProfile {
    PROFILES
        .iter()
        .find(|profile| profile.matches(device_id))
        .unwrap_or(&PROFILES[0])
}
