//! Product and imagery constants shared by the API and the client store.

/// Base URL of the storefront CDN hosting the generic product photography.
pub const CDN_BASE: &str = "https://cdn.shopify.com/s/files/1/0012/8660/2848/files";

/// SKU of the customizable product.
pub const DEFAULT_PRODUCT_SKU: &str = "TC-VEG-009";

/// Display name of the customizable product.
pub const DEFAULT_PRODUCT_NAME: &str = "9-Piece Vegan Truffle Collection";

/// Number of images returned by a preview request.
pub const PREVIEW_IMAGE_COUNT: usize = 3;

/// Path of the generic orbit video shown when a combo has no video of its own.
pub const GENERIC_VIDEO_PATH: &str = "/video/box-orbit.mp4";

/// Labels for the default image positions, in gallery order.
pub const IMAGE_LABELS: [&str; 4] = [
    "Open Box — Top View",
    "Closed Box — Ribbon Detail",
    "Open Box — Angled View",
    "Truffles — Close Up",
];

/// Generic product images served when a combo has no renders of its own (hero first).
pub fn default_images() -> Vec<String> {
    vec![
        format!("{CDN_BASE}/Vegan_9pc_001.jpg?v=1727797701"),
        format!("{CDN_BASE}/Dalmore9pcTruffleboxVosges_V03.webp"),
        format!("{CDN_BASE}/Dalmore9pcTruffleopenboxVosges_V01.webp"),
        format!("{CDN_BASE}/Exotic_9pc_001.jpg"),
    ]
}

/// Canned preview images used when the catalog has nothing for the requested combo.
pub fn default_preview_images() -> Vec<String> {
    default_images()
        .into_iter()
        .take(PREVIEW_IMAGE_COUNT)
        .collect()
}
