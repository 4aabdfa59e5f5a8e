//! Stored-name rules for uploaded files.

/// URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Name used when the client supplies nothing usable.
pub const FALLBACK_FILE_NAME: &str = "upload.bin";

/// Reduce a client-supplied filename to a single safe path component.
///
/// Directory parts (either separator style) and control characters are
/// stripped. Empty results and the `.`/`..` components fall back to
/// [`FALLBACK_FILE_NAME`].
pub fn sanitize_file_name(original: &str) -> String {
    let last = original
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();

    match cleaned {
        "" | "." | ".." => FALLBACK_FILE_NAME.to_string(),
        name => name.to_string(),
    }
}

/// Build the on-disk name for an upload received at `millis` (Unix epoch).
pub fn stored_name(millis: i64, original: &str) -> String {
    format!("{millis}-{}", sanitize_file_name(original))
}

/// Public URL of a stored file.
pub fn public_url(name: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{}", urlencoding::encode(name))
}
