// Gallery planning: caption map in, ordered render plan out.
// Kept pure so render decisions are testable without a live document; the DOM
// pass in loader.rs materializes the plan.

use crate::types::{CaptionMap, GalleryItem, MediaKind};

/// Build the render plan for a gallery container.
/// Entries keep caption-map order; a positive `limit` keeps only the first
/// `limit` entries, anything else keeps all of them.
pub fn plan_gallery(captions: &CaptionMap, base_path: &str, limit: Option<usize>) -> Vec<GalleryItem> {
    let keep = match limit {
        Some(n) if n > 0 => n,
        _ => captions.len(),
    };

    captions
        .iter()
        .take(keep)
        .map(|(filename, caption)| GalleryItem {
            filename: filename.to_string(),
            kind: MediaKind::from_path(filename),
            media_path: media_path(base_path, filename),
            caption: caption.to_string(),
        })
        .collect()
}

/// Resolve a gallery filename against the configured base path.
pub fn media_path(base_path: &str, filename: &str) -> String {
    format!("{base_path}{filename}")
}

/// Last path segment of an href, used to match static captions against the
/// caption map.
pub fn filename_from_href(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(entries: &[(&str, &str)]) -> CaptionMap {
        entries
            .iter()
            .map(|(name, caption)| (name.to_string(), caption.to_string()))
            .collect()
    }

    #[test]
    fn plan_keeps_map_order_and_classifies_media() {
        let captions = map(&[("a.jpg", "Cat"), ("b.mp4", "Dance")]);
        let plan = plan_gallery(&captions, "/media/gallery/", None);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].filename, "a.jpg");
        assert_eq!(plan[0].kind, MediaKind::Image);
        assert_eq!(plan[0].media_path, "/media/gallery/a.jpg");
        assert_eq!(plan[0].caption, "Cat");
        assert_eq!(plan[1].filename, "b.mp4");
        assert_eq!(plan[1].kind, MediaKind::Video);
        assert_eq!(plan[1].caption, "Dance");
    }

    #[test]
    fn positive_limit_truncates() {
        let captions = map(&[("a.jpg", "A"), ("b.jpg", "B"), ("c.jpg", "C")]);
        let plan = plan_gallery(&captions, "/m/", Some(2));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].filename, "b.jpg");
    }

    #[test]
    fn zero_limit_keeps_everything() {
        let captions = map(&[("a.jpg", "A"), ("b.jpg", "B")]);
        assert_eq!(plan_gallery(&captions, "/m/", Some(0)).len(), 2);
        assert_eq!(plan_gallery(&captions, "/m/", None).len(), 2);
    }

    #[test]
    fn filename_extraction() {
        assert_eq!(filename_from_href("/media/gallery/a.jpg"), "a.jpg");
        assert_eq!(filename_from_href("b.mp4"), "b.mp4");
        assert_eq!(filename_from_href("https://cdn.example.com/x/y/c.png"), "c.png");
    }

    fn arb_caption_map() -> impl Strategy<Value = CaptionMap> {
        prop::collection::vec(
            ("[a-z]{1,8}", prop::bool::ANY, "[ -~]{0,20}"),
            0..24,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (stem, video, caption))| {
                    let ext = if video { "mp4" } else { "jpg" };
                    // Index prefix keeps keys unique.
                    (format!("{i}_{stem}.{ext}"), caption)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn plan_length_is_min_of_limit_and_keys(
            captions in arb_caption_map(),
            limit in prop::option::of(0usize..40),
        ) {
            let plan = plan_gallery(&captions, "/media/gallery/", limit);
            let expected = match limit {
                Some(n) if n > 0 => n.min(captions.len()),
                _ => captions.len(),
            };
            prop_assert_eq!(plan.len(), expected);
        }

        #[test]
        fn plan_preserves_order_and_suffix_classification(captions in arb_caption_map()) {
            let plan = plan_gallery(&captions, "/media/gallery/", None);
            for (item, (filename, caption)) in plan.iter().zip(captions.iter()) {
                prop_assert_eq!(item.filename.as_str(), filename);
                prop_assert_eq!(item.caption.as_str(), caption);
                prop_assert_eq!(item.kind.is_video(), filename.ends_with(".mp4"));
                let expected_path = format!("/media/gallery/{filename}");
                prop_assert_eq!(item.media_path.as_str(), expected_path.as_str());
            }
        }
    }
}
