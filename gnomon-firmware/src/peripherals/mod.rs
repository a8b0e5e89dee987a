//! Hardware bring-up and small on-board drivers

pub mod display;
pub mod step_counter;

pub use display::WatchDisplay;
pub use step_counter::Bma423;
