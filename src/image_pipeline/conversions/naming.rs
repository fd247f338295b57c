use std::path::Path;

use crate::image_pipeline::grayscale::ConversionMethod;

/// Derives the output file name for `input`.
///
/// Takes everything after the last path separator, drops everything from
/// its final `.` onward and appends the method's suffix. The split is
/// literal: `dir/` yields an empty base and `..` yields `.`. Non-UTF-8
/// bytes in the name are replaced with U+FFFD.
pub fn output_file_name(input: &Path, method: ConversionMethod) -> String {
    let path = input.to_string_lossy();
    let base = match path.rfind(std::path::is_separator) {
        Some(sep) => &path[sep + 1..],
        None => &path[..],
    };
    let stem = match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => &base[..],
    };
    format!("{stem}{}", method.file_suffix())
}
