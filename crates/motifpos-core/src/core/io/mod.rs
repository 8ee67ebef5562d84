//! Provides input/output functionality for structure files and the fixed-position table.
//!
//! The PDB reader works on fixed character columns and keeps every line verbatim, so a
//! structure can be written back byte-for-byte apart from the fields a workflow edits.

pub mod discovery;
pub mod pdb;
pub mod table;
pub mod traits;
