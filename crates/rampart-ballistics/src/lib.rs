//! Ballistic mathematics for tower fire control.
//!
//! Two pure, engine-independent pieces: the closed-form intercept solver
//! ([`intercept::solve`]) and the arced flight path ([`arc::ArcTrajectory`]).
//! Both operate on `glam::DVec3` in world space and carry no ECS state.

pub mod arc;
pub mod intercept;

pub use rampart_core as core;
