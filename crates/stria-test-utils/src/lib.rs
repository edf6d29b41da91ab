//! Test utilities and scenario fixtures for Stria development.
//!
//! Not published; every other crate pulls this in as a dev-dependency
//! for its integration tests.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{
    baseline, patterning, pure_decay, pure_diffusion, range_of, total_mass,
};
