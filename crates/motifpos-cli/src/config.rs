mod builder;
mod defaults;
mod file;

pub use builder::{
    build_extract_motif_config, build_fixed_positions_config, build_map_motif_config,
    load_file_config,
};
