use regex::Regex;
use std::sync::OnceLock;

fn bullet_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // A leading hyphen or bullet glyph, then the item text.
        Regex::new(r"^\s*[-•]\s*(.+)").expect("valid bullet regex")
    })
}

fn places_phrase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // "places you can go: A, B" style narratives. (?s) lets the remainder
        // span lines; items are split on commas and newlines afterwards.
        Regex::new(r"(?is)places you can go[:\s]*(.+)").expect("valid phrase regex")
    })
}

/// Extracts an ordered list of place names from a places narrative.
///
/// Bulleted lines are preferred; failing that, a "places you can go" phrase is
/// split on commas and newlines; failing that, the whole narrative becomes a
/// single item so the caller always has something renderable. Order is
/// extraction order, no dedup, no sorting. Absent or empty text yields an
/// empty list.
pub fn parse_places(text: Option<&str>) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let mut items: Vec<String> = text
        .lines()
        .filter_map(|line| bullet_line_re().captures(line))
        .map(|c| c[1].trim().to_string())
        .collect();

    if items.is_empty() {
        if let Some(c) = places_phrase_re().captures(text) {
            items = c[1]
                .split([',', '\n'])
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    if items.is_empty() {
        items.push(text.to_string());
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bulleted_lines_in_order() {
        let items = parse_places(Some("- Red Fort\n- India Gate\n- Lotus Temple"));
        assert_eq!(items, vec!["Red Fort", "India Gate", "Lotus Temple"]);
    }

    #[test]
    fn accepts_bullet_glyphs_and_indentation() {
        let items = parse_places(Some("Here you go:\n  • Old Town\n  • Harbour Walk"));
        assert_eq!(items, vec!["Old Town", "Harbour Walk"]);
    }

    #[test]
    fn absent_or_empty_text_yields_nothing() {
        assert!(parse_places(None).is_empty());
        assert!(parse_places(Some("")).is_empty());
    }

    #[test]
    fn falls_back_to_places_phrase() {
        let items = parse_places(Some(
            "These are the places you can go: Red Fort, India Gate, Lotus Temple",
        ));
        assert_eq!(items, vec!["Red Fort", "India Gate", "Lotus Temple"]);
    }

    #[test]
    fn phrase_fallback_splits_on_newlines_too() {
        let items = parse_places(Some("Places you can go:\nRed Fort\nIndia Gate"));
        assert_eq!(items, vec!["Red Fort", "India Gate"]);
    }

    #[test]
    fn falls_back_to_whole_text() {
        let items = parse_places(Some("Just visit the old town square"));
        assert_eq!(items, vec!["Just visit the old town square"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let items = parse_places(Some("- A\n- B\n- A"));
        assert_eq!(items, vec!["A", "B", "A"]);
    }
}
