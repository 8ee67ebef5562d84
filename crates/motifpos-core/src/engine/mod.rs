//! # Engine Module
//!
//! The logic shared by all workflows.
//!
//! - **Configuration** ([`config`]) - Typed run configurations and their builders
//! - **Error Handling** ([`error`]) - The fatal error kinds a run can abort with
//! - **Progress Monitoring** ([`progress`]) - Optional callback-based progress events
//! - **Remapping** ([`remap`]) - Rewriting scaffold residue names from a motif
//! - **Fixed Positions** ([`selection`]) - The predicate that decides which residues are
//!   fixed, in its motif-file and occupancy-marker flavours

pub mod config;
pub mod error;
pub mod progress;
pub mod remap;
pub mod selection;
