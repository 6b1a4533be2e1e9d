// Current-section selection for scroll-based nav highlighting.
// Pure: the facade feeds in section offsets read from the live document.

use crate::types::NavSettings;

/// A page section with an id, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    /// Distance from the document top to the section top, in pixels.
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        SectionOffset {
            id: id.into(),
            top,
        }
    }
}

/// Pick the current section id for a scroll offset.
/// A section qualifies once the offset passes its top minus the lead; sections
/// are walked in document order and the last qualifying one wins. Excluded ids
/// never qualify, and the home id is the fallback when nothing does.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, settings: &NavSettings) -> String {
    let mut current = settings.home_id.clone();

    for section in sections {
        if settings.excluded_ids.iter().any(|id| id == &section.id) {
            continue;
        }
        if scroll_y >= section.top - settings.lead_px {
            current = section.id.clone();
        }
    }

    current
}

/// Whether a nav link href points at the given section id.
pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("gallery", 400.0),
            SectionOffset::new("shows", 900.0),
            SectionOffset::new("contact", 1600.0),
        ]
    }

    #[test]
    fn defaults_to_home_near_the_top() {
        let settings = NavSettings::default();
        assert_eq!(current_section(&sections(), 0.0, &settings), "home");
    }

    #[test]
    fn last_qualifying_section_wins() {
        let settings = NavSettings::default();
        // 1500 passes shows (900 - 150) but not contact (1600 - 150).
        assert_eq!(current_section(&sections(), 1500.0, &settings), "shows");
        assert_eq!(current_section(&sections(), 2000.0, &settings), "contact");
    }

    #[test]
    fn gallery_never_becomes_current() {
        let settings = NavSettings::default();
        // 500 is well past gallery's top but before shows qualifies.
        assert_eq!(current_section(&sections(), 500.0, &settings), "home");
    }

    #[test]
    fn lead_pulls_sections_in_early() {
        let settings = NavSettings::default();
        // shows top is 900; it qualifies from 750 onward.
        assert_eq!(current_section(&sections(), 749.0, &settings), "home");
        assert_eq!(current_section(&sections(), 750.0, &settings), "shows");
    }

    #[test]
    fn link_matching_requires_fragment() {
        assert!(link_targets_section("#shows", "shows"));
        assert!(!link_targets_section("#shows", "home"));
        assert!(!link_targets_section("/shows", "shows"));
    }
}
