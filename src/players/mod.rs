mod scripted;
pub use scripted::*;

#[cfg(feature = "cli")]
mod human;
#[cfg(feature = "cli")]
mod terminal;
#[cfg(feature = "cli")]
pub use human::*;
#[cfg(feature = "cli")]
pub use terminal::*;
