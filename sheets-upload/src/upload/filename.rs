//! Filename checks and sanitizing

use unicode_normalization::UnicodeNormalization;

/// Extensions accepted for upload (compared lowercase)
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Lowercased text after the last `.`, if there is one
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// True when the filename ends in an allowed extension (case-insensitive)
pub fn allowed_file(filename: &str) -> bool {
    extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// Non-ASCII characters are decomposed and dropped, path separators and
/// whitespace runs collapse to `_`, anything outside `[A-Za-z0-9_.-]` is
/// removed, and leading/trailing `.` and `_` are trimmed. The result may be
/// empty.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename.nfkd().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
