use clap::Parser;
use inertia::{binary_codes, compute_hierarchy, Point};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod loader;

fn main() -> Result<(), anyhow::Error> {
    let cli = cli::Command::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let points = match (&cli.input_path, cli.grid) {
        (Some(path), _) => loader::load_points(path)?,
        (None, grid) => {
            let grid = grid.unwrap_or_default();
            Point::grid(grid.columns, grid.rows)
        }
    };
    info!(points = points.len(), k = cli.k, "partitioning");

    let hierarchy = compute_hierarchy(&points, cli.k)?;

    for (ix, axis) in hierarchy.axes().iter().enumerate() {
        println!(
            "axis {ix}: a = {:.6}, b = {:.6}, xbar = {:.6}, ybar = {:.6}, sbar = {:.6}",
            axis.a,
            axis.b,
            axis.x_bar(),
            axis.y_bar(),
            axis.threshold
        );
    }
    for (ix, leaf) in hierarchy.leaves().iter().enumerate() {
        println!("region {ix}: {} points", leaf.len());
    }

    if cli.codes {
        let codes = binary_codes(&points, hierarchy.axes());
        for (point, code) in points.iter().zip(codes) {
            println!("{} {} {} {code}", point.id(), point.x(), point.y());
        }
    }

    Ok(())
}
