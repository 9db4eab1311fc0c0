use clap::Parser;
use csv::ReaderBuilder;
use fnv::FnvHashMap;
use std::error::Error;

use tanplane::metric::{Metric, Point};
use tanplane::nearest::k_nearest;

#[derive(Parser, Debug)]
#[command(name = "nearest")]
#[command(about = "Rank points from a CSV by distance to a query point under one local tangent-plane metric.", long_about = None)]
struct Cli {
    /// Path to the .csv file with header and rows of id,lon,lat
    #[arg(short, long)]
    csv: String,

    /// Query longitude (degrees)
    #[arg(long)]
    lon: f64,

    /// Query latitude (degrees)
    #[arg(long)]
    lat: f64,

    /// Number of neighbors to report
    #[arg(short, long, default_value_t = 5)]
    k: usize,

    /// Reference latitude for the metric. Defaults to the query latitude.
    #[arg(short, long)]
    reference_latitude: Option<f64>,
}

fn parse_points(path: &str) -> Result<Vec<(i64, Point)>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .from_path(path)?;

    let mut order: Vec<i64> = Vec::new();
    let mut coords: FnvHashMap<i64, Point> = FnvHashMap::default();
    for result in rdr.records() {
        let record = result?;
        let id: i64 = record[0].parse()?;
        let lon: f64 = record[1].parse()?;
        let lat: f64 = record[2].parse()?;
        if !coords.contains_key(&id) {
            order.push(id);
        }
        // Last row wins for a repeated id.
        coords.insert(id, Point::new(lon, lat));
    }

    Ok(order.into_iter().map(|id| (id, coords[&id])).collect())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let points = parse_points(&cli.csv)?;
    if points.is_empty() {
        return Err(format!("no points in {}", cli.csv).into());
    }

    let query = Point::new(cli.lon, cli.lat);
    let reference_latitude = cli.reference_latitude.unwrap_or(cli.lat);
    let metric = Metric::new(reference_latitude);

    println!(
        "Ranking {} points around ({:.4}, {:.4}) at reference latitude {:.4} (scale_x {:.6})",
        points.len(),
        cli.lon,
        cli.lat,
        reference_latitude,
        metric.scale_x()
    );

    let top = k_nearest(&metric, &points, query, cli.k);
    for (id, d2) in &top {
        println!("{} {:.9} {:.9}", id, d2, d2.sqrt());
    }
    println!("Reported {} of {} points", top.len(), points.len());

    Ok(())
}
