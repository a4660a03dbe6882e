//! File naming helpers for generated modules.

/// Derive a filesystem stem from a module id.
///
/// Module ids are opaque (commonly reverse-DNS); every character that is
/// not ASCII alphanumeric becomes an underscore so the stem is safe on any
/// filesystem. An empty id maps to `module`.
pub fn module_file_stem(id: &str) -> String {
    if id.is_empty() {
        return "module".to_string();
    }
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
