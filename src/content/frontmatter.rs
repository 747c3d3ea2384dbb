//! Frontmatter splitting

use super::record::Frontmatter;

const FENCE: &str = "---";

/// Split a document into its frontmatter mapping and remaining body.
///
/// The block must open on the first line with `---` and close with a line
/// holding only `---`. A missing block yields an empty mapping and the
/// whole document as body. Malformed YAML is logged and treated the same
/// way, so a single broken post never aborts a scan.
pub fn split(content: &str) -> (Frontmatter, &str) {
    let Some((yaml, body)) = fenced_block(content) else {
        return (Frontmatter::new(), content);
    };

    if yaml.trim().is_empty() {
        return (Frontmatter::new(), body);
    }

    match serde_yaml::from_str::<Option<Frontmatter>>(yaml) {
        Ok(fm) => (fm.unwrap_or_default(), body),
        Err(e) => {
            tracing::warn!("Failed to parse YAML frontmatter, ignoring it: {}", e);
            (Frontmatter::new(), body)
        }
    }
}

/// Locate the `---` fenced block at the top of `content`
fn fenced_block(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }

    None
}
