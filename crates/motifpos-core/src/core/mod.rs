//! # Core Module
//!
//! Data structures and file formats that every workflow is built on.
//!
//! - **Records and structures** ([`models`]) - Parsed `ATOM` records, whole structures,
//!   motif index maps and the aggregate fixed-position table
//! - **File I/O** ([`io`]) - The fixed-column PDB reader/writer, structure discovery and
//!   the JSON table writer
//!
//! Everything in this layer is stateless: a [`models::structure::Structure`] is read,
//! transformed by the engine, written, and dropped.

pub mod io;
pub mod models;

#[cfg(test)]
pub(crate) mod test_utils;
