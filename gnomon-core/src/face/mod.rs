//! The analog face: angle math, fixed layout, hand drawing

pub mod angle;
pub mod hands;
pub mod layout;

pub use hands::draw_face;
