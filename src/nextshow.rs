// Next-show card rendering decisions: date formatting, image path resolution,
// and the fixed fallback shown when the fetch fails.

use chrono::{DateTime, NaiveDate};

use crate::error::EnhanceError;
use crate::types::NextShowRecord;

pub const FALLBACK_NAME: &str = "No upcoming shows";
pub const FALLBACK_DATE: &str = "Check back soon!";

/// What the next-show card should display, as a pure function of the fetch
/// outcome. Applying this to the DOM lives in loader.rs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextShowView {
    Loaded {
        name: String,
        date_text: String,
        link: String,
        image_src: String,
    },
    /// Fetch or decode failed: fixed texts, link hidden.
    Unavailable,
}

impl NextShowView {
    pub fn from_outcome(outcome: Result<NextShowRecord, EnhanceError>, image_base: &str) -> Self {
        match outcome {
            Ok(record) => NextShowView::Loaded {
                date_text: format_show_date(&record.date),
                image_src: format!("{image_base}{}", record.image),
                name: record.name,
                link: record.link,
            },
            Err(_) => NextShowView::Unavailable,
        }
    }
}

/// Format an ISO-8601 date as a long English date ("March 5, 2026").
/// Accepts plain dates and RFC 3339 timestamps; anything else passes through
/// unchanged so the card still shows what the record said.
pub fn format_show_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NextShowRecord {
        NextShowRecord {
            name: "Riverside Session".to_string(),
            date: "2026-03-05".to_string(),
            link: "https://example.com/tickets".to_string(),
            image: "poster.jpg".to_string(),
        }
    }

    #[test]
    fn plain_date_formats_long_form() {
        assert_eq!(format_show_date("2026-03-05"), "March 5, 2026");
        assert_eq!(format_show_date("2025-12-31"), "December 31, 2025");
    }

    #[test]
    fn rfc3339_timestamp_is_accepted() {
        assert_eq!(format_show_date("2026-03-05T20:30:00+01:00"), "March 5, 2026");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_show_date("sometime soon"), "sometime soon");
    }

    #[test]
    fn loaded_view_resolves_image_against_base() {
        let view = NextShowView::from_outcome(Ok(record()), "/media/nextshow/");
        match view {
            NextShowView::Loaded {
                name,
                date_text,
                link,
                image_src,
            } => {
                assert_eq!(name, "Riverside Session");
                assert_eq!(date_text, "March 5, 2026");
                assert_eq!(link, "https://example.com/tickets");
                assert_eq!(image_src, "/media/nextshow/poster.jpg");
            }
            NextShowView::Unavailable => panic!("expected loaded view"),
        }
    }

    #[test]
    fn failed_fetch_yields_unavailable() {
        let outcome = Err(EnhanceError::Fetch("offline".to_string()));
        assert_eq!(
            NextShowView::from_outcome(outcome, "/media/nextshow/"),
            NextShowView::Unavailable
        );
    }
}
