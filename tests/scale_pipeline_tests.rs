use mapscale::prelude::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn viewport_at(lat: f64, lng: f64, zoom: f64) -> Viewport {
    Viewport::new(LatLng::new(lat, lng), zoom, Point::new(1024.0, 768.0))
}

/// All view points land on the same geodetic coordinate.
struct CollapsedView;

impl MapView for CollapsedView {
    fn view_size(&self) -> Point {
        Point::new(640.0, 480.0)
    }

    fn map_scale(&self) -> f64 {
        0.5
    }

    fn view_to_map(&self, view_point: Point) -> Result<Point> {
        Ok(view_point)
    }

    fn map_to_geodetic(&self, _map_point: Point) -> Result<LatLng> {
        Ok(LatLng::new(12.0, 34.0))
    }
}

#[test]
fn test_equator_matches_mercator_resolution() {
    let viewport = viewport_at(0.0, 0.0, 10.0);
    let ppm = ScaleCalculator::new().pixels_per_meter(&viewport).unwrap();

    // Along the equator map meters and ground meters coincide
    assert!((ppm * viewport.resolution() - 1.0).abs() < 1e-6);
}

#[test]
fn test_high_latitude_stretch() {
    let viewport = viewport_at(60.0, 10.0, 10.0);
    let ratio = ScaleCalculator::new()
        .map_unit_per_meter_ratio(&viewport)
        .unwrap();

    // Mercator stretches by roughly 1 / cos(latitude)
    assert!((ratio - 2.0).abs() < 0.02, "ratio was {}", ratio);
}

#[test]
fn test_repeated_queries_are_bit_identical() {
    let viewport = viewport_at(52.3676, 4.9041, 13.37);
    let calculator = ScaleCalculator::new();
    let first = calculator.pixels_per_meter(&viewport).unwrap();
    let second = calculator.pixels_per_meter(&viewport).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_zooming_in_increases_pixels_per_meter() {
    let calculator = ScaleCalculator::new();
    let mut previous = 0.0;
    for zoom in 3..=18 {
        let ppm = calculator
            .pixels_per_meter(&viewport_at(45.0, 7.0, zoom as f64))
            .unwrap();
        assert!(ppm > previous, "zoom {} gave {} after {}", zoom, ppm, previous);
        previous = ppm;
    }
}

#[test]
fn test_collapsed_samples_use_unit_ratio() {
    let calculator = ScaleCalculator::new();
    assert_eq!(calculator.map_unit_per_meter_ratio(&CollapsedView).unwrap(), 1.0);

    let ppm = calculator.pixels_per_meter(&CollapsedView).unwrap();
    assert!((ppm - 0.5 * 96.0 / 2.54 * 100.0).abs() < 1e-9);
}

#[test]
fn test_samples_off_the_world_use_unit_ratio() {
    // At zoom 0 a 100 px sample near the antimeridian leaves the projection
    let viewport = Viewport::new(LatLng::new(0.0, 180.0), 0.0, Point::new(800.0, 600.0));
    let ratio = ScaleCalculator::new()
        .map_unit_per_meter_ratio(&viewport)
        .unwrap();
    assert_eq!(ratio, 1.0);
}

#[test]
fn test_spherical_and_ellipsoidal_agree_closely() {
    let viewport = viewport_at(35.0, 139.0, 11.0);
    let ellipsoidal = ScaleCalculator::new().pixels_per_meter(&viewport).unwrap();
    let spherical = ScaleCalculator::with_geodesy(SphericalGeodesy)
        .pixels_per_meter(&viewport)
        .unwrap();
    assert!((ellipsoidal - spherical).abs() / ellipsoidal < 0.01);
}

#[test]
fn test_ten_meters_per_pixel_scenario() {
    let (bar, unit) = ScaleBarFormatter::format(0.1, 100.0, DistanceUnit::Metre).unwrap();
    assert_eq!(unit, DistanceUnit::Metre);
    assert_eq!(bar.label, "1000 m");
    assert_eq!(bar.width_pixels, 100.0);
}

#[test]
fn test_bar_width_bound_across_zooms() {
    let mut indicator = ScaleIndicator::new(ScaleIndicatorOptions::default()).unwrap();
    for zoom in 0..=18 {
        let viewport = viewport_at(-33.87, 151.21, zoom as f64);
        for max_width in [64.0, 100.0, 150.0] {
            let layout = indicator.update(&viewport, max_width).unwrap();
            assert!(layout.bar_width <= max_width);
            assert!(layout.bar_left >= 0.0);
            assert!(matches!(
                layout.unit,
                DistanceUnit::Metre | DistanceUnit::Kilometre
            ));
        }
    }
}

#[test]
fn test_imperial_indicator_stays_imperial() {
    let options = UnitSystem::Imperial.resolve();
    let mut indicator = ScaleIndicator::new(options).unwrap();

    let city = indicator.update(&viewport_at(40.71, -74.0, 16.0), 100.0).unwrap();
    assert_eq!(city.unit, DistanceUnit::Foot);

    let country = indicator.update(&viewport_at(40.71, -74.0, 6.0), 100.0).unwrap();
    assert_eq!(country.unit, DistanceUnit::MileUs);
    assert!(country.label.ends_with(" mi"));
}

#[test]
fn test_map_change_drives_indicator() {
    let mut map = Map::new(LatLng::new(48.8566, 2.3522), 15.0, Point::new(800.0, 600.0));
    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = notifications.clone();
    let ids = map.on_map_change(move |_event: &MapEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(ids.len(), 4);

    let mut indicator = ScaleIndicator::new(ScaleIndicatorOptions::default()).unwrap();
    let street = indicator.update(&map, 100.0).unwrap().clone();
    assert_eq!(street.unit, DistanceUnit::Metre);

    map.zoom_to(7.0, None).unwrap();
    map.set_size(Point::new(1024.0, 768.0)).unwrap();
    for _ in map.process_events() {
        indicator.update(&map, 100.0).unwrap();
    }

    assert_eq!(notifications.load(Ordering::SeqCst), 2);
    let region = indicator.layout().unwrap();
    assert_eq!(region.unit, DistanceUnit::Kilometre);
    assert!(region.pixels_per_meter < street.pixels_per_meter);

    for id in ids {
        map.off(id);
    }
    map.pan(Point::new(30.0, 0.0)).unwrap();
    map.process_events();
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}
