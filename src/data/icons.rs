//! Marker icon registry
//!
//! Maps the `img` reference carried by a site feature to a concrete icon
//! description. Known site kinds get their exported pixel sizes; anything
//! unrecognized resolves to the default icon.

use once_cell::sync::Lazy;
use crate::prelude::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub image_url: String,
    pub size: [u32; 2],
}

const DEFAULT_ICON_URL: &str = "/assets/icons/site.png";
const DEFAULT_ICON_SIZE: [u32; 2] = [16, 16];

/// Pixel sizes per exported site kind (the icon file stem)
static ICON_SIZES: Lazy<HashMap<&'static str, [u32; 2]>> = Lazy::new(|| {
    let mut sizes = HashMap::default();
    for kind in [
        "camp",
        "cave",
        "dark_fortress",
        "dark_pits",
        "forest_retreat",
        "fortress",
        "hamlet",
        "hillocks",
        "labyrinth",
        "lair",
        "monastery",
        "mountain_halls",
        "shrine",
        "tower",
        "town",
        "vault",
    ] {
        sizes.insert(kind, [16, 16]);
    }
    // Larger capitals read better when zoomed out
    sizes.insert("castle", [24, 24]);
    sizes
});

/// Resolves an icon reference (an image path such as
/// `/assets/icons/town.png`) to a marker icon
pub fn icon_for(reference: &str) -> MarkerIcon {
    let stem = reference
        .rsplit('/')
        .next()
        .and_then(|file| file.strip_suffix(".png"))
        .unwrap_or("");

    match ICON_SIZES.get(stem) {
        Some(&size) => MarkerIcon {
            image_url: reference.to_string(),
            size,
        },
        None => MarkerIcon {
            image_url: DEFAULT_ICON_URL.to_string(),
            size: DEFAULT_ICON_SIZE,
        },
    }
}
