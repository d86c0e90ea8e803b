//! Worker credential compliance tracking for aged-care organisations.
//!
//! The heart of the crate is [`compliance`], which turns a worker's uploaded
//! credential records into per-credential and overall compliance states against
//! a declarative catalog of required credential definitions. Persistence and
//! document storage live behind narrow repository traits so the evaluator
//! itself stays a pure, clock-injected computation.

pub mod compliance;
pub mod config;
pub mod error;
pub mod telemetry;
