//! Preview transform: base-tag injection.

/// Route prefix the server mounts the project root under.
pub const ASSET_ROUTE: &str = "/assets";

/// Rewrite an HTML document so relative asset references resolve against
/// the asset route for `base_dir` (the document's directory, relative to
/// the project root, empty at the root).
///
/// Insertion policy, in priority order: inside an existing `<head>` tag;
/// else right after `<html>` with a synthesized head block; else prepended
/// before all original content.
pub fn inject_base_tag(content: &str, base_dir: &str) -> String {
    let href = if base_dir.is_empty() {
        format!("{}/", ASSET_ROUTE)
    } else {
        format!("{}/{}/", ASSET_ROUTE, base_dir)
    };
    let base_tag = format!("<base href=\"{}\">", href);

    if content.contains("<head>") {
        content.replacen("<head>", &format!("<head>\n    {}", base_tag), 1)
    } else if content.contains("<html>") {
        content.replacen(
            "<html>",
            &format!("<html>\n<head>\n    {}\n</head>", base_tag),
            1,
        )
    } else {
        format!("{}\n{}", base_tag, content)
    }
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
