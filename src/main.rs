use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Writer};
use medians::Medianf64;

use tanplane::{Metric, Point};

#[derive(Parser, Debug)]
#[command(name = "pairs")]
#[command(about = "Score lon/lat point pairs from a CSV under one local tangent-plane metric.", long_about = None)]
struct Cli {
    /// Path to the .csv file with header and rows of lon1,lat1,lon2,lat2
    #[arg(short, long)]
    csv: String,

    /// Reference latitude (degrees) for the metric. Defaults to the median
    /// latitude across both endpoints of the input.
    #[arg(short, long)]
    reference_latitude: Option<f64>,

    /// Output CSV (pair, squared_distance, distance). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,
}

fn parse_pairs(path: &str) -> Result<Vec<(Point, Point)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut pairs = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let lon1: f64 = record[0].parse()?;
        let lat1: f64 = record[1].parse()?;
        let lon2: f64 = record[2].parse()?;
        let lat2: f64 = record[3].parse()?;
        pairs.push((Point::new(lon1, lat1), Point::new(lon2, lat2)));
    }

    Ok(pairs)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pairs = parse_pairs(&cli.csv)?;
    if pairs.is_empty() {
        bail!("no pairs in {}", cli.csv);
    }

    // One metric for the whole file, centered on the data unless told otherwise.
    let reference_latitude = match cli.reference_latitude {
        Some(lat) => lat,
        None => {
            let lats: Vec<f64> = pairs.iter().flat_map(|&(p1, p2)| [p1.y, p2.y]).collect();
            lats.medf_unchecked()
        }
    };
    let metric = Metric::new(reference_latitude);

    println!(
        "Scoring {} pairs at reference latitude {:.4} (scale_x {:.6})",
        pairs.len(),
        reference_latitude,
        metric.scale_x()
    );

    use std::time::SystemTime;
    let now = SystemTime::now();
    let squared: Vec<f64> = pairs
        .iter()
        .map(|&(p1, p2)| metric.squared_distance(p1, p2))
        .collect();
    if let Ok(elapsed) = now.elapsed() {
        println!("{} s", elapsed.as_secs_f64());
    }

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["pair", "squared_distance", "distance"])?;
        for (idx, d2) in squared.iter().enumerate() {
            wtr.write_record(&[
                idx.to_string(),
                format!("{:.9}", d2),
                format!("{:.9}", d2.sqrt()),
            ])?;
        }
        wtr.flush()?;
        println!("Wrote {} pairs to {}", squared.len(), out_path);
    } else {
        let dists: Vec<f64> = squared.iter().map(|d2| d2.sqrt()).collect();
        let mut maxd = 0.0_f64;
        for d in dists.iter().copied() {
            if d > maxd {
                maxd = d;
            }
        }
        println!("Pairs: {}", dists.len());
        println!("Max scaled distance (deg): {:.6}", maxd);
        println!("Median scaled distance (deg): {:.6}", dists.medf_unchecked());
    }

    Ok(())
}
