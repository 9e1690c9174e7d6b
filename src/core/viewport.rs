use crate::core::geo::{LatLng, LatLngBounds, Point};

/// View state of the map: center, zoom and the pixel size of the canvas.
///
/// The viewport does not render anything; layers and the optional UI read
/// from it, and all mutation goes through `set_view` / `fit_bounds` so the
/// zoom limits always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
    pub size: Point,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        let mut viewport = Self {
            center,
            zoom: 0.0,
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        };
        viewport.zoom = viewport.clamp_zoom(zoom);
        viewport
    }

    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.clamp_zoom(self.zoom);
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = self.clamp_zoom(zoom);
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Largest zoom at which `bounds` fits entirely within the viewport size
    pub fn bounds_zoom(&self, bounds: &LatLngBounds) -> f64 {
        let sw = bounds.south_west.to_world_pixel(0.0);
        let ne = bounds.north_east.to_world_pixel(0.0);
        let width = (ne.x - sw.x).abs().max(f64::EPSILON);
        let height = (sw.y - ne.y).abs().max(f64::EPSILON);

        let zoom_x = (self.size.x / width).log2();
        let zoom_y = (self.size.y / height).log2();
        self.clamp_zoom(zoom_x.min(zoom_y))
    }

    /// Recenters the view on `bounds` at the largest zoom that shows it whole
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let zoom = self.bounds_zoom(bounds);
        self.set_view(bounds.center(), zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0, Point::new(1024.0, 768.0))
    }
}
