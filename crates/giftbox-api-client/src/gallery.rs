//! Product gallery selection for one combo.

use giftbox_core::constants::{GENERIC_VIDEO_PATH, IMAGE_LABELS};
use giftbox_core::ComboAsset;

const DEFAULT_LABEL: &str = "Product View";
const COMBO_VIDEO_LABEL: &str = "360° Turntable — Per-Combo Render";
const GENERIC_VIDEO_LABEL: &str = "360° Product Rotation";

/// What the gallery is showing: the orbit video, or one image by index.
#[derive(Debug, Clone)]
pub struct GallerySelection {
    asset: ComboAsset,
    show_video: bool,
    active_index: Option<usize>,
}

impl GallerySelection {
    /// Opens on the video when the combo has one of its own, otherwise on the hero image.
    pub fn new(asset: ComboAsset) -> Self {
        let show_video = asset.video_url.is_some();
        Self {
            asset,
            show_video,
            active_index: Some(0),
        }
    }

    pub fn asset(&self) -> &ComboAsset {
        &self.asset
    }

    pub fn is_showing_video(&self) -> bool {
        self.show_video
    }

    /// Index of the highlighted thumbnail. `None` while the video is selected.
    pub fn active_index(&self) -> Option<usize> {
        if self.show_video {
            None
        } else {
            self.active_index
        }
    }

    /// Switch between the video and the first image.
    pub fn toggle_video(&mut self) {
        if self.show_video {
            self.show_video = false;
            self.active_index = Some(0);
        } else {
            self.show_video = true;
            self.active_index = None;
        }
    }

    pub fn select_thumbnail(&mut self, index: usize) {
        self.active_index = Some(index);
        self.show_video = false;
    }

    /// Selected image, falling back to the hero when the index is past the end.
    pub fn current_image(&self) -> Option<&str> {
        self.active_index
            .and_then(|i| self.asset.images.get(i))
            .or_else(|| self.asset.images.first())
            .map(String::as_str)
    }

    /// The combo's own video, or the generic orbit video.
    pub fn video_src(&self) -> &str {
        self.asset.video_url.as_deref().unwrap_or(GENERIC_VIDEO_PATH)
    }

    /// Caption under the main display.
    pub fn label(&self) -> &'static str {
        if self.show_video {
            return if self.asset.video_url.is_some() {
                COMBO_VIDEO_LABEL
            } else {
                GENERIC_VIDEO_LABEL
            };
        }
        self.active_index
            .and_then(|i| IMAGE_LABELS.get(i))
            .copied()
            .unwrap_or(DEFAULT_LABEL)
    }

    pub fn status_badge(&self) -> &'static str {
        if self.asset.is_ready() {
            "Asset Ready"
        } else {
            "Generating..."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftbox_core::{AssetStatus, ComboKey};

    fn asset(images: &[&str], video: Option<&str>) -> ComboAsset {
        ComboAsset {
            combo_key: ComboKey::from_raw("pure-black_gold_black"),
            status: AssetStatus::Ready,
            images: images.iter().map(|s| s.to_string()).collect(),
            video_url: video.map(str::to_string),
        }
    }

    #[test]
    fn test_starts_on_video_only_when_combo_has_one() {
        let with_video = GallerySelection::new(asset(&["a"], Some("https://img/orbit.mp4")));
        assert!(with_video.is_showing_video());
        assert_eq!(with_video.active_index(), None);
        assert_eq!(with_video.video_src(), "https://img/orbit.mp4");
        assert_eq!(with_video.label(), COMBO_VIDEO_LABEL);

        let without = GallerySelection::new(asset(&["a"], None));
        assert!(!without.is_showing_video());
        assert_eq!(without.current_image(), Some("a"));
        assert_eq!(without.video_src(), GENERIC_VIDEO_PATH);
    }

    #[test]
    fn test_toggle_video() {
        let mut gallery = GallerySelection::new(asset(&["a", "b"], None));
        gallery.select_thumbnail(1);

        gallery.toggle_video();
        assert!(gallery.is_showing_video());
        assert_eq!(gallery.label(), GENERIC_VIDEO_LABEL);

        gallery.toggle_video();
        assert!(!gallery.is_showing_video());
        assert_eq!(gallery.active_index(), Some(0));
        assert_eq!(gallery.current_image(), Some("a"));
    }

    #[test]
    fn test_thumbnail_selection_and_labels() {
        let mut gallery = GallerySelection::new(asset(&["a", "b", "c", "d", "e"], Some("v")));
        gallery.select_thumbnail(1);
        assert!(!gallery.is_showing_video());
        assert_eq!(gallery.current_image(), Some("b"));
        assert_eq!(gallery.label(), IMAGE_LABELS[1]);

        gallery.select_thumbnail(4);
        assert_eq!(gallery.current_image(), Some("e"));
        assert_eq!(gallery.label(), "Product View");
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_hero() {
        let mut gallery = GallerySelection::new(asset(&["hero", "b"], None));
        gallery.select_thumbnail(7);
        assert_eq!(gallery.current_image(), Some("hero"));
    }

    #[test]
    fn test_status_badge() {
        let ready = GallerySelection::new(asset(&["a"], None));
        assert_eq!(ready.status_badge(), "Asset Ready");

        let queued = GallerySelection::new(ComboAsset::queued(
            ComboKey::from_raw("fallback"),
            vec!["a".to_string()],
        ));
        assert_eq!(queued.status_badge(), "Generating...");
    }
}
