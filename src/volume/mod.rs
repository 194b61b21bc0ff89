//! Volume and slice buffer types shared by every kernel.
//!
//! - [`VolumeF32`]: owned dense 3D scalar grid in x-fastest layout.
//! - [`SliceF32`]: owned single-channel 2D plane with row access, used by
//!   the per-slice pipelines (edge detection, non-local means).
//!
//! Every kernel consumes its input read-only and allocates a fresh output
//! of identical dimensions; results are applied back by the caller.

pub mod f32;
pub mod slice;

pub use self::f32::VolumeF32;
pub use self::slice::SliceF32;
