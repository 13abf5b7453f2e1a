//! The base-10⁹ limb arithmetic engine.
//!
//! Everything in here operates on bare little-endian limb buffers; the
//! public wrapper types own the buffers and maintain the canonical-form
//! invariants at their boundary.

// MODULES
pub(crate) mod div;
pub(crate) mod math;
pub(crate) mod mul;
pub(crate) mod sqrt;
