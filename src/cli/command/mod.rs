pub mod generate;
pub mod interactive;
pub mod plot;

use std::path::{Path, PathBuf};

pub use generate::generate;
pub use interactive::interactive;
pub use plot::plot;

/// Default chart location: the input file with a `.png` extension.
pub fn make_chart_file_name(input: &Path) -> PathBuf {
    input.with_extension("png")
}

// -- Tests -------------------------------------------------------------------
