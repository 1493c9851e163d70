/// Canonicalizes one line of OCR output (or a catalog name) into a comparable token.
///
/// Trims and lowercases, turns `-` and spaces into `_`, maps the font's common
/// misreads `d` -> `o` and `i` -> `l`, then drops every character that is not
/// alphanumeric or `_`. The result may be empty.
pub fn normalize_str(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            'd' => 'o',
            'i' => 'l',
            other => other,
        })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
