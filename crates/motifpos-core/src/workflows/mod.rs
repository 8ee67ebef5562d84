//! # Workflows Module
//!
//! Top-level batch entry points. Each workflow lists the `*.pdb` files of its input
//! directory in file-name order, processes them one at a time, and aborts on the first
//! fatal error.
//!
//! - **Motif mapping** ([`map_motif`]) - Copy motif residue names onto generated scaffolds
//! - **Fixed positions** ([`fixed_positions`]) - Build and write the fixed-position table
//!   from paired motif files or from occupancy markers
//! - **Motif extraction** ([`extract_motif`]) - Split occupancy-marked atoms out of
//!   combined structures into motif-only files

pub mod extract_motif;
pub mod fixed_positions;
mod inputs;
pub mod map_motif;
