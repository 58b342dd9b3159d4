//! Release-notes parsing.
//!
//! Release bodies are free-form markdown. Only their structure is extracted:
//! `##`/`###` headers open sections, `-`/`*` bullets become items of the
//! current section, and every other line is ignored.

/// A titled group of bullet items extracted from a release body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }
}

const HEADER_PREFIXES: [&str; 2] = ["## ", "### "];
const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

/// Parses a release body into its sections, in body order.
///
/// Bullets that appear before the first header are dropped.
pub fn parse_release_notes(body: Option<&str>) -> Vec<Section> {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return Vec::new();
    };

    let mut sections: Vec<Section> = Vec::new();

    for line in body.lines() {
        let line = line.trim();

        if let Some(title) = header_title(line) {
            sections.push(Section::new(title));
        } else if let Some(item) = bullet_item(line) {
            if let Some(current) = sections.last_mut() {
                current.items.push(item.to_string());
            }
        }
    }

    sections
}

fn header_title(line: &str) -> Option<&str> {
    if !HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }
    Some(line.trim_start_matches('#').trim_start())
}

fn bullet_item(line: &str) -> Option<&str> {
    BULLET_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(str::trim_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, items: &[&str]) -> Section {
        Section {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_empty_or_missing_body() {
        assert!(parse_release_notes(None).is_empty());
        assert!(parse_release_notes(Some("")).is_empty());
    }

    #[test]
    fn test_parse_mixed_markers() {
        let sections = parse_release_notes(Some("## A\n- x\n- y\n## B\n* z"));
        assert_eq!(
            sections,
            vec![section("A", &["x", "y"]), section("B", &["z"])]
        );
    }

    #[test]
    fn test_parse_without_headers_is_empty() {
        let body = "Just some prose.\n- a bullet\n* another\n# Top level heading";
        assert!(parse_release_notes(Some(body)).is_empty());
    }

    #[test]
    fn test_bullets_before_first_header_are_dropped() {
        let sections = parse_release_notes(Some("- orphan\n## Fixes\n- real"));
        assert_eq!(sections, vec![section("Fixes", &["real"])]);
    }

    #[test]
    fn test_header_followed_by_prose_has_no_items() {
        let sections =
            parse_release_notes(Some("## Highlights\nThis release is mostly polish.\n"));
        assert_eq!(sections, vec![section("Highlights", &[])]);
    }

    #[test]
    fn test_section_count_matches_header_lines_in_order() {
        let body = "### One\n## Two\nprose\n### Three\n- item\n## Four";
        let titles: Vec<_> = parse_release_notes(Some(body))
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_lines_are_trimmed_and_markers_stripped() {
        let body = "  ##   Spaced Title  \r\n\t-    padded item \r\n  *\tnot a bullet\n";
        let sections = parse_release_notes(Some(body));
        assert_eq!(sections, vec![section("Spaced Title", &["padded item"])]);
    }

    #[test]
    fn test_other_heading_levels_are_ignored() {
        let body = "# Title\n#### Deep\n## Real\n- a\n####### Deeper\n- b";
        let sections = parse_release_notes(Some(body));
        assert_eq!(sections, vec![section("Real", &["a", "b"])]);
    }

    #[test]
    fn test_markers_without_trailing_space_are_ignored() {
        let body = "##NoSpace\n## Ok\n-dash\n*star\n- fine";
        let sections = parse_release_notes(Some(body));
        assert_eq!(sections, vec![section("Ok", &["fine"])]);
    }
}
