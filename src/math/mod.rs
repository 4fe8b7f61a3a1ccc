//! Math library modules for the calculation core

pub mod accrual;
pub mod fixed_point;
pub mod safe_math;
pub mod scaled;
mod wide;

pub use accrual::*;
pub use fixed_point::*;
pub use safe_math::*;
pub use scaled::{to_real, to_scaled};
