/// readers of the protein, transcript and carrier tables
pub mod load_from_file;
