//! Reusable UI components.
//!
//! Class names map onto the global stylesheet provided by the desktop app.

mod animated;
mod badge;
mod button;
mod card;
mod input;
mod logo;
mod progress;
mod step_track;

pub use animated::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use logo::*;
pub use progress::*;
pub use step_track::*;
