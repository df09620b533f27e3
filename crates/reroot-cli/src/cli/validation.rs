use reroot_core::config::{normalize_alias_prefix, normalize_extension, validate_alias_prefix};

/// Parse and validate an alias token given on the command line.
///
/// A trailing `/` is accepted and dropped, so `@` and `@/` are the same
/// token.
///
/// # Examples
///
/// Valid: `@`, `~`, `#app`, `@src/`
/// Invalid: `""`, `./`, `a/b`, `@ x`
///
/// # Errors
///
/// Returns an error message if the token cannot root a specifier.
pub fn parse_alias_prefix(s: &str) -> Result<String, String> {
    let prefix = normalize_alias_prefix(s);
    validate_alias_prefix(&prefix).map_err(|err| err.to_string())?;
    Ok(prefix)
}

/// Parse a single file extension, with or without the leading dot.
///
/// # Errors
///
/// Returns an error message for empty values and values containing path
/// separators or whitespace.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = normalize_extension(s);
    if ext.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }

    if ext.contains(&['/', '\\'][..]) || ext.chars().any(char::is_whitespace) {
        return Err(format!(
            "Extension cannot contain path separators or whitespace: '{}'",
            s
        ));
    }

    Ok(ext)
}
