//! Maps a platform-reported hardware identifier to the network interface
//! names (cell, wifi, bluetooth) of that device, for use as traffic
//! accounting keys. Unknown identifiers fall back to a default profile.

pub mod profile;
pub mod registry;
pub mod resolve;

pub use profile::DeviceProfile;
pub use registry::default_profile;
pub use registry::lookup_profile;
pub use registry::profiles;
pub use resolve::resolve_profile;
