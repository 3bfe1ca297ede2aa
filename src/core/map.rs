use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    input::{EventManager, ListenerId, MapEvent, MapEventKind},
    traits::MapView,
    Error, Result,
};

/// A map host: owns the view state and notifies listeners when it changes
pub struct Map {
    viewport: Viewport,
    event_manager: EventManager,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self::with_viewport(Viewport::new(center, zoom, size))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            event_manager: EventManager::new(),
        }
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_valid() || !zoom.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "cannot set view to {:?} at zoom {}",
                center, zoom
            )));
        }

        let old_center = self.viewport.center;
        let old_zoom = self.viewport.zoom;

        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);

        if self.viewport.center != old_center || self.viewport.zoom != old_zoom {
            self.event_manager.emit(MapEvent::ViewChanged {
                center: self.viewport.center,
                zoom: self.viewport.zoom,
            });
        }

        Ok(())
    }

    pub fn set_size(&mut self, size: Point) -> Result<()> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "view size must be positive, got {}x{}",
                size.x, size.y
            )));
        }

        if self.viewport.size != size {
            self.viewport.set_size(size);
            self.event_manager.emit(MapEvent::Resized { size });
        }

        Ok(())
    }

    /// Pans by a pixel offset
    pub fn pan(&mut self, delta: Point) -> Result<()> {
        if !delta.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "cannot pan by {:?}",
                delta
            )));
        }

        let old_center = self.viewport.center;
        let center = self.viewport.pan(delta);

        if center != old_center {
            self.event_manager.emit(MapEvent::MoveEnd { center });
        }

        Ok(())
    }

    pub fn zoom_to(&mut self, zoom: f64, focus_point: Option<Point>) -> Result<()> {
        if !zoom.is_finite() || focus_point.map_or(false, |focus| !focus.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "cannot zoom to {} around {:?}",
                zoom, focus_point
            )));
        }

        let old_zoom = self.viewport.zoom;
        self.viewport.zoom_to(zoom, focus_point);

        if self.viewport.zoom != old_zoom {
            self.event_manager.emit(MapEvent::ZoomEnd {
                zoom: self.viewport.zoom,
            });
        }

        Ok(())
    }

    /// Register a listener for one kind of change
    pub fn on<F>(&mut self, kind: MapEventKind, callback: F) -> ListenerId
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.event_manager.on(kind, callback)
    }

    /// Register the same listener for every kind of change
    pub fn on_map_change<F>(&mut self, callback: F) -> Vec<ListenerId>
    where
        F: Fn(&MapEvent) + Send + Sync + Clone + 'static,
    {
        MapEventKind::ALL
            .iter()
            .map(|kind| self.event_manager.on(*kind, callback.clone()))
            .collect()
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.event_manager.off(id)
    }

    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.event_manager.process_events()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl MapView for Map {
    fn view_size(&self) -> Point {
        self.viewport.view_size()
    }

    fn map_scale(&self) -> f64 {
        self.viewport.map_scale()
    }

    fn view_to_map(&self, view_point: Point) -> Result<Point> {
        self.viewport.view_to_map(view_point)
    }

    fn map_to_geodetic(&self, map_point: Point) -> Result<LatLng> {
        self.viewport.map_to_geodetic(map_point)
    }
}
