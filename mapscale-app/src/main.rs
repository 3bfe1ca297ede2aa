use anyhow::Context;
use clap::Parser;
use mapscale::prelude::*;
use std::path::PathBuf;

/// Prints the scale bar and center location for a Web Mercator view
#[derive(Debug, Parser)]
#[command(name = "mapscale-app", version, about)]
struct Args {
    /// Latitude of the view center
    #[arg(long, default_value_t = 37.7749, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude of the view center
    #[arg(long, default_value_t = -122.4194, allow_hyphen_values = true)]
    lng: f64,

    #[arg(long, default_value_t = 12.0)]
    zoom: f64,

    /// View width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// View height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Widest the scale bar may be, in pixels
    #[arg(long, default_value_t = 100.0)]
    max_width: f64,

    /// Starting unit, by symbol or name (m, km, NM, mi, ft)
    #[arg(long, default_value = "m")]
    unit: String,

    #[arg(long, default_value_t = 96.0)]
    dpi: f64,

    /// JSON scale configuration; overrides --unit and --dpi
    #[arg(long)]
    config: Option<PathBuf>,

    /// Measure on a sphere instead of the WGS84 ellipsoid
    #[arg(long)]
    spherical: bool,
}

fn main() -> anyhow::Result<()> {
    mapscale::init_logging();
    let args = Args::parse();

    let options = match &args.config {
        Some(path) => ScaleConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?
            .options(),
        None => ScaleIndicatorOptions {
            distance_unit: args.unit.parse()?,
            dpi: args.dpi,
            ..ScaleIndicatorOptions::default()
        },
    };

    let map = Map::new(
        LatLng::new(args.lat, args.lng),
        args.zoom,
        Point::new(args.width, args.height),
    );
    log::info!(
        "view centered on {:?} at zoom {}",
        map.viewport().center,
        map.viewport().zoom
    );

    let layout = if args.spherical {
        let mut indicator = ScaleIndicator::with_geodesy(options, SphericalGeodesy)?;
        indicator.update(&map, args.max_width)?.clone()
    } else {
        let mut indicator = ScaleIndicator::new(options)?;
        indicator.update(&map, args.max_width)?.clone()
    };

    let center = Point::new(args.width / 2.0, args.height / 2.0);
    let readout = MouseLocation::default().readout(&map, center, None)?;

    println!("scale bar:        {}", layout.label);
    println!("bar width:        {:.1} px", layout.bar_width);
    println!("pixels per meter: {:.6}", layout.pixels_per_meter);
    println!("center:           {}", readout.coordinates);

    Ok(())
}
