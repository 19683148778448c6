//! Physics Module
//!
//! The controller core: velocity integration against friction and gravity,
//! four-corner footprint sampling, and the axis-wise collision resolver.

pub mod footprint;
pub mod integrator;
pub mod resolver;

pub use footprint::{Footprint, FootprintSample, highest_floor, sample_footprint};
pub use integrator::{GroundedState, VelocityIntegrator, WalkConfig};
pub use resolver::{Resolution, ResolveOutcome, resolve};
