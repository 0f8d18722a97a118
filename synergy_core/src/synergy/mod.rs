//! Synergy definitions - requirements, gates and effect payload

mod definition;
mod name;
mod spec;

pub use definition::{ItemPools, SynergyDefinition};
pub use name::{normalize_name, NameKey, StringTable};
pub use spec::SynergySpec;

/// Engine constants
pub mod constants {
    /// Sentinel prefixed to every normalized name key
    pub const NAME_KEY_PREFIX: char = '#';

    /// Smallest quota at which a wildcard token may substitute for an item
    pub const WILDCARD_MIN_QUOTA: i32 = 3;

    /// Quota used when content does not specify one
    pub const DEFAULT_QUOTA: i32 = 2;
}
