//! Path normalization helpers.
//!
//! Expansion works on forward-slash paths throughout; backslashes are treated
//! as separators even on POSIX hosts so Windows-origin inputs normalize the
//! same way everywhere. A `[A-Za-z]:` prefix is an absolute drive root.

/// Splits a forward-slash path into its root prefix and the rest.
/// The root is `""` for relative paths, `"/"` for POSIX-absolute ones, and
/// the drive prefix (`"C:/"` or a bare `"C:"`) for drive-letter paths.
pub(crate) fn split_root(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let end = if bytes.get(2) == Some(&b'/') { 3 } else { 2 };
        return (&path[..end], &path[end..]);
    }
    if bytes.first() == Some(&b'/') {
        return (&path[..1], &path[1..]);
    }
    ("", path)
}

/// Normalizes separators and collapses `.` / `..` / duplicate slashes.
/// `..` never escapes an absolute root; relative paths keep leading `..`.
pub fn normalize(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let (root, rest) = split_root(&slashed);
    let absolute = !root.is_empty();

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            name => parts.push(name),
        }
    }

    let mut out = String::new();
    if absolute {
        out.push_str(root.trim_end_matches('/'));
        out.push('/');
    }
    out.push_str(&parts.join("/"));
    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Normalizes `path` and resolves it against the current directory when it
/// is relative. Best-effort: if the current directory is unavailable the
/// normalized relative path is returned as-is.
pub fn absolutize(path: &str) -> String {
    let normalized = normalize(path);
    if !split_root(&normalized).0.is_empty() {
        return normalized;
    }
    let Ok(cwd) = std::env::current_dir() else {
        log::warn!("current directory unavailable; leaving {normalized} relative");
        return normalized;
    };
    let cwd = cwd.to_string_lossy().into_owned();
    normalize(&format!("{cwd}/{normalized}"))
}
