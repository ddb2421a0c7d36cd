//! Solver stages. Each one is a free function over `&mut FluidGrid` so the
//! orchestrator can sequence them and tests can drive them one at a time.

pub mod forces;
pub mod projection;
pub mod boundary;
pub mod interpolate;
pub mod advection;
pub mod diagnostics;

pub use advection::{advect_density, advect_velocity};
pub use boundary::extrapolate_boundary;
pub use forces::apply_gravity;
pub use interpolate::sample_field;
pub use projection::{project, ProjectionReport};
