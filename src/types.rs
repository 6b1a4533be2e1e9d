// Wire payloads, render-plan types, and configuration with serde defaults.
// JSON object order is significant for the caption map, so it gets a manual
// Deserialize that keeps entries in document order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered filename → caption mapping fetched from the captions endpoint.
/// Entry order follows the JSON document and drives gallery render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionMap {
    entries: Vec<(String, String)>,
}

impl CaptionMap {
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, caption)| caption.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, caption)| (name.as_str(), caption.as_str()))
    }
}

impl FromIterator<(String, String)> for CaptionMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        CaptionMap {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for CaptionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CaptionMapVisitor;

        impl<'de> Visitor<'de> for CaptionMapVisitor {
            type Value = CaptionMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of filename to caption")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(CaptionMap { entries })
            }
        }

        deserializer.deserialize_map(CaptionMapVisitor)
    }
}

/// Next-show record fetched once per page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextShowRecord {
    pub name: String,
    /// ISO-8601 date (plain date or RFC 3339 timestamp).
    pub date: String,
    pub link: String,
    /// Image filename, resolved against the next-show base path.
    pub image: String,
}

/// Media classification derived from a path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn is_video(self) -> bool {
        self == MediaKind::Video
    }
}

/// One gallery render-plan entry. Rebuilt from the caption map on every
/// gallery load; no identity persists across reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub filename: String,
    pub kind: MediaKind,
    pub media_path: String,
    pub caption: String,
}

/// Facade configuration passed from JS. An empty object yields the defaults
/// the static site ships with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnhanceConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub paths: MediaPaths,
    #[serde(default)]
    pub observer: ObserverSettings,
    #[serde(default)]
    pub scroll: ScrollSettings,
    #[serde(default)]
    pub nav: NavSettings,
    #[serde(default)]
    pub volume: VolumeSettings,
    #[serde(default)]
    pub lightbox: LightboxSettings,
}

/// Fetch endpoints for the two JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_next_show_url")]
    pub next_show_url: String,
    #[serde(default = "default_captions_url")]
    pub captions_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            next_show_url: default_next_show_url(),
            captions_url: default_captions_url(),
        }
    }
}

fn default_next_show_url() -> String {
    "/media/nextshow/nextshow.json".to_string()
}

fn default_captions_url() -> String {
    "/media/gallery/captions.json".to_string()
}

/// Base paths media filenames are resolved against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaPaths {
    #[serde(default = "default_gallery_base")]
    pub gallery_base: String,
    #[serde(default = "default_next_show_base")]
    pub next_show_base: String,
}

impl Default for MediaPaths {
    fn default() -> Self {
        MediaPaths {
            gallery_base: default_gallery_base(),
            next_show_base: default_next_show_base(),
        }
    }
}

fn default_gallery_base() -> String {
    "/media/gallery/".to_string()
}

fn default_next_show_base() -> String {
    "/media/nextshow/".to_string()
}

/// Intersection watcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverSettings {
    /// Fraction of an element that must be visible before it counts.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Margin applied to the effective viewport before intersection tests.
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
    #[serde(default = "default_visible_class")]
    pub visible_class: String,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        ObserverSettings {
            threshold: default_threshold(),
            root_margin: default_root_margin(),
            visible_class: default_visible_class(),
        }
    }
}

fn default_threshold() -> f64 {
    0.1
}

fn default_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

fn default_visible_class() -> String {
    "fade-in".to_string()
}

/// Scroll-direction stagger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Per-item transition-delay step in seconds.
    #[serde(default = "default_stagger_step")]
    pub stagger_step_secs: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            stagger_step_secs: default_stagger_step(),
        }
    }
}

fn default_stagger_step() -> f64 {
    0.1
}

/// Nav-tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSettings {
    /// A section becomes current this many pixels before its top is reached.
    #[serde(default = "default_lead_px")]
    pub lead_px: f64,
    #[serde(default = "default_home_id")]
    pub home_id: String,
    /// Section ids that never become current (gallery is nested under home).
    #[serde(default = "default_excluded_ids")]
    pub excluded_ids: Vec<String>,
    #[serde(default = "default_link_selector")]
    pub link_selector: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

impl Default for NavSettings {
    fn default() -> Self {
        NavSettings {
            lead_px: default_lead_px(),
            home_id: default_home_id(),
            excluded_ids: default_excluded_ids(),
            link_selector: default_link_selector(),
            active_class: default_active_class(),
        }
    }
}

fn default_lead_px() -> f64 {
    150.0
}

fn default_home_id() -> String {
    "home".to_string()
}

fn default_excluded_ids() -> Vec<String> {
    vec!["gallery".to_string()]
}

fn default_link_selector() -> String {
    ".nav-link".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

/// Background-video volume toggle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSettings {
    #[serde(default = "default_video_id")]
    pub video_id: String,
    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
    #[serde(default = "default_muted_glyph")]
    pub muted_glyph: String,
    #[serde(default = "default_unmuted_glyph")]
    pub unmuted_glyph: String,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        VolumeSettings {
            video_id: default_video_id(),
            toggle_id: default_toggle_id(),
            initial_volume: default_initial_volume(),
            muted_glyph: default_muted_glyph(),
            unmuted_glyph: default_unmuted_glyph(),
        }
    }
}

fn default_video_id() -> String {
    "bgVideo".to_string()
}

fn default_toggle_id() -> String {
    "muteToggle".to_string()
}

fn default_initial_volume() -> f64 {
    0.1
}

fn default_muted_glyph() -> String {
    "▷".to_string()
}

fn default_unmuted_glyph() -> String {
    "❚❚".to_string()
}

/// Lightbox element identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightboxSettings {
    #[serde(default = "default_overlay_id")]
    pub overlay_id: String,
    #[serde(default = "default_content_id")]
    pub content_id: String,
    #[serde(default = "default_close_id")]
    pub close_id: String,
}

impl Default for LightboxSettings {
    fn default() -> Self {
        LightboxSettings {
            overlay_id: default_overlay_id(),
            content_id: default_content_id(),
            close_id: default_close_id(),
        }
    }
}

fn default_overlay_id() -> String {
    "lightbox".to_string()
}

fn default_content_id() -> String {
    "lightboxContent".to_string()
}

fn default_close_id() -> String {
    "lightboxClose".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_map_preserves_document_order() {
        let json = r#"{"z.jpg":"Last letter","a.mp4":"First letter","m.png":"Middle"}"#;
        let map: CaptionMap = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["z.jpg", "a.mp4", "m.png"]);
        assert_eq!(map.get("a.mp4"), Some("First letter"));
        assert_eq!(map.get("missing.jpg"), None);
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config: EnhanceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoints.captions_url, "/media/gallery/captions.json");
        assert_eq!(config.observer.threshold, 0.1);
        assert_eq!(config.observer.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.nav.lead_px, 150.0);
        assert_eq!(config.nav.excluded_ids, vec!["gallery".to_string()]);
        assert_eq!(config.volume.initial_volume, 0.1);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: EnhanceConfig =
            serde_json::from_str(r#"{"scroll":{"stagger_step_secs":0.25}}"#).unwrap();
        assert_eq!(config.scroll.stagger_step_secs, 0.25);
        assert_eq!(config.volume.video_id, "bgVideo");
    }

    #[test]
    fn media_kind_by_suffix() {
        assert!(MediaKind::from_path("clip.mp4").is_video());
        assert!(!MediaKind::from_path("photo.jpg").is_video());
        assert!(!MediaKind::from_path("clip.mp4.png").is_video());
    }

    #[test]
    fn next_show_record_parses() {
        let json = r#"{"name":"Riverside","date":"2026-03-05","link":"https://example.com/t","image":"poster.jpg"}"#;
        let record: NextShowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Riverside");
        assert_eq!(record.image, "poster.jpg");
    }
}
