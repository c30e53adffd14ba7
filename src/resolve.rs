use once_cell::sync::OnceCell;

use crate::profile::DeviceProfile;
use crate::registry::lookup_profile;

/// Resolve the profile for the running device.
///
/// The table scan runs at most once per process: the first call looks up
/// `device_id` and caches the result, and every later call returns the
/// cached profile regardless of its argument. The identifier reflects fixed
/// hardware, so it is treated as constant for the process lifetime.
/// Concurrent first calls are serialized; exactly one performs the scan.
pub fn resolve_profile(device_id: &str) -> &'static DeviceProfile {
    static INSTANCE: OnceCell<&'static DeviceProfile> = OnceCell::new();
    let profile = *INSTANCE.get_or_init(|| {
        log::info!("device: {}", device_id);
        lookup_profile(device_id)
    });
    log::debug!("profile: {}", profile.model);
    profile
}
