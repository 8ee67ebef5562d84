pub mod extract_motif;
pub mod fixed_positions;
pub mod map_motif;
