use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use pmgrid_core::io::discover_batches;
use pmgrid_core::projection::ProjectionKind;
use pmgrid_core::render::{ColorSelect, DotCountColorSelect, HeatmapRenderer, PmValueColorSelect};
use pmgrid_core::{FieldBuilder, FieldConfig};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorBy {
    Pm,
    Count,
}

#[derive(Parser, Debug)]
#[command(version, about = "Bins station PM measurements into interpolated heat-map grids", long_about = None)]
struct Args {
    /// Directory containing one CSV file per batch
    #[arg(short, long)]
    data_dir: PathBuf,

    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON grid configuration; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    slices: Option<usize>,

    #[arg(long)]
    iterations: Option<usize>,

    /// Treat input coordinates as longitude/latitude and apply the Miller projection
    #[arg(long)]
    miller: bool,

    #[arg(long)]
    no_outlier_filter: bool,

    #[arg(long, value_enum, default_value = "pm")]
    color_by: ColorBy,

    /// Also plot the retained station positions
    #[arg(long)]
    points: bool,

    /// Stream fields to a rerun viewer
    #[arg(long)]
    rerun: bool,
}

fn load_config(args: &Args) -> Result<FieldConfig> {
    let mut config = match &args.config {
        Some(path) => FieldConfig::from_file(path).with_context(|| format!("loading config {}", path.display()))?,
        None => FieldConfig::default(),
    };
    if let Some(slices) = args.slices {
        config = config.with_slice_count(slices);
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if args.miller {
        config = config.with_projection(ProjectionKind::Miller);
    }
    if args.no_outlier_filter {
        config = config.with_outlier_filter(false);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let color_select: Arc<dyn ColorSelect> = match args.color_by {
        ColorBy::Pm => Arc::new(PmValueColorSelect),
        ColorBy::Count => Arc::new(DotCountColorSelect),
    };
    let mut builder = FieldBuilder::new(config)
        .context("invalid grid configuration")?
        .with_color_select(Arc::clone(&color_select));
    let grid = builder.config();
    info!(
        slices = grid.slice_count,
        iterations = grid.interpolation_iterations,
        outlier_filter = grid.outlier_filter,
        "grid over ({}, {}) width {}",
        grid.bounds.min_x, grid.bounds.min_y, grid.bounds.width
    );
    if args.rerun {
        let stream = rerun::RecordingStreamBuilder::new("pmgrid").spawn().context("spawning rerun viewer")?;
        builder = builder.with_rerun_stream(Arc::new(stream));
    }

    let batches = discover_batches(&args.data_dir)
        .with_context(|| format!("reading batches from {}", args.data_dir.display()))?;
    info!("found {} batches in {}", batches.len(), args.data_dir.display());

    let renderer = HeatmapRenderer::new(&args.output_dir, Arc::clone(&color_select)).with_points(args.points);

    let mut failed = 0;
    for (name, result) in builder.build_all(&batches) {
        match result {
            Ok(outcome) => {
                let html = renderer.save(&outcome.field)?;
                let geojson_path = args.output_dir.join(format!("{}.geojson", name));
                fs::write(&geojson_path, outcome.field.to_geojson())
                    .with_context(|| format!("writing {}", geojson_path.display()))?;
                info!(batch = %name, "wrote {} and {}", html.display(), geojson_path.display());
            }
            Err(err) => {
                failed += 1;
                error!(batch = %name, "batch skipped: {err}");
            }
        }
    }
    info!("done: {} fields built, {} batches skipped", batches.len() - failed, failed);
    Ok(())
}
