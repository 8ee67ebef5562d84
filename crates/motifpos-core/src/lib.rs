//! # motifpos Core Library
//!
//! Prepares the outputs of motif-scaffolding structure generators for conditional
//! inverse folding. Generated scaffolds carry a known motif at some residue positions;
//! the sequence-design model downstream has to be told which positions are fixed
//! (copied from the motif) and which are free to be redesigned.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Fixed-column PDB atom records, structures, motif
//!   index maps and the fixed-position table, together with their file I/O.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting,
//!   residue-name remapping and the fixed-position rules shared by both extractor
//!   variants.
//!
//! - **[`workflows`]: The Public API.** Batch entry points that walk a directory of
//!   structures and produce processed PDB files or the aggregate fixed-position table.

pub mod core;
pub mod engine;
pub mod workflows;
