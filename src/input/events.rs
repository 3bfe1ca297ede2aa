use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Change notifications emitted by the map
///
/// Every variant means the view-to-model geometry may have changed, so a
/// scale indicator listening to any of them should recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Map view has changed (center or zoom)
    ViewChanged { center: LatLng, zoom: f64 },
    /// The view was resized
    Resized { size: Point },
    /// Pan ended
    MoveEnd { center: LatLng },
    /// Zoom ended
    ZoomEnd { zoom: f64 },
}

/// Discriminant used to register listeners for one kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEventKind {
    ViewChanged,
    Resized,
    MoveEnd,
    ZoomEnd,
}

impl MapEvent {
    pub fn kind(&self) -> MapEventKind {
        match self {
            MapEvent::ViewChanged { .. } => MapEventKind::ViewChanged,
            MapEvent::Resized { .. } => MapEventKind::Resized,
            MapEvent::MoveEnd { .. } => MapEventKind::MoveEnd,
            MapEvent::ZoomEnd { .. } => MapEventKind::ZoomEnd,
        }
    }
}

impl MapEventKind {
    pub const ALL: [MapEventKind; 4] = [
        MapEventKind::ViewChanged,
        MapEventKind::Resized,
        MapEventKind::MoveEnd,
        MapEventKind::ZoomEnd,
    ];
}
