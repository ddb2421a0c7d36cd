//! Zero-cost stencil access
//!
//! The projection and advection loops touch four or five neighbors per cell.
//! Every neighbor of an interior cell is in range because of the solid
//! border ring, so release builds skip the bounds checks while debug builds
//! keep them and panic with the offending index.
//!
//! Usage:
//! ```rust
//! use eulerflow_engine::fast;
//!
//! let num_x = 4;
//! let here = num_x + 1;
//!
//! let u = vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! // Read: fast!(slice, [index])
//! let right = *fast!(u, [here + 1]);
//! assert_eq!(right, 6.0);
//!
//! let mut density = vec![0.0f32; 8];
//! // Write: fast!(slice, [index] = value)
//! fast!(density, [here] = 0.5);
//! assert_eq!(density[here], 0.5);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Only use on indices that the solid border guarantees are in range.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
