//! Default folder locations.

use std::path::PathBuf;

/// `<Documents>/fonts` when it exists, otherwise the documents folder itself.
///
/// Falls back to the home directory, then the current directory, on systems
/// without a documents folder.
pub fn font_folder() -> PathBuf {
    let docs = dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let fonts = docs.join("fonts");
    if fonts.is_dir() { fonts } else { docs }
}
