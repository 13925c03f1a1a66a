//! Default values for the glyph preview grid and style controls.

pub fn point_size() -> u32 {
    46
}

pub fn bold() -> bool {
    false
}

pub fn italic() -> bool {
    false
}

pub fn columns() -> usize {
    10 // Code points per visual row
}

pub fn reference_point_size() -> u32 {
    14 // Label cells use the system UI font at this size
}
