//! # Core Models Module
//!
//! Representations of structure files and of the artifacts derived from them.
//!
//! ## Key Components
//!
//! - [`atom`] - One parsed `ATOM` record with its fixed-column fields and raw line
//! - [`structure`] - An ordered, named sequence of lines read from one file
//! - [`motif`] - Residue index to residue name lookup built from a motif's alpha carbons
//! - [`table`] - The domain -> chain -> fixed residue indices table consumed downstream

pub mod atom;
pub mod motif;
pub mod structure;
pub mod table;
