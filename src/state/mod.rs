//! Value records passed into and out of the core

pub mod params;
pub mod position;
pub mod reserve;
pub mod resolution;

pub use params::*;
pub use position::*;
pub use reserve::*;
pub use resolution::*;
