use std::fs;
use std::path::Path;

/// Formats one `ATOM` line with the standard fixed-width layout.
///
/// `marker` fills columns 61-66, the field the occupancy-marker rules read.
pub fn atom_line(
    serial: usize,
    atom_name: &str,
    residue_name: &str,
    chain_id: char,
    residue_index: i32,
    marker: &str,
) -> String {
    format!(
        "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6}{:>6}          {:>2}\n",
        serial,
        format!(" {}", atom_name),
        residue_name,
        chain_id,
        residue_index,
        1.5 * serial as f64,
        -2.25,
        0.125 * residue_index as f64,
        "1.00",
        marker,
        &atom_name[..1],
    )
}

/// Backbone `N`, `CA`, `C` lines for one residue, all carrying `marker`.
pub fn residue_lines(
    first_serial: usize,
    residue_name: &str,
    chain_id: char,
    residue_index: i32,
    marker: &str,
) -> String {
    ["N", "CA", "C"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            atom_line(
                first_serial + i,
                name,
                residue_name,
                chain_id,
                residue_index,
                marker,
            )
        })
        .collect()
}

pub fn write_file(dir: &Path, file_name: &str, content: &str) {
    fs::write(dir.join(file_name), content).unwrap();
}
