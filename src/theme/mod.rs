//! Theme for the desktop app: the global stylesheet and palette constants.

mod colors;
mod styles;

pub use colors::root_properties;
pub use styles::GLOBAL_STYLES;
