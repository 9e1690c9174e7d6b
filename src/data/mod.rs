pub mod icons;
pub mod loader;
pub mod sites;

pub use icons::{icon_for, MarkerIcon};
pub use loader::SiteLoader;
pub use sites::{SiteCollection, SiteFeature, SiteGeometry, SiteProperties};
