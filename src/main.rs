use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yolo_anchors::{
    AnchorReport, BoxExtractor, ImageFileSizes, KMeansConfig, ModelInputSize, avg_iou,
    check_cluster_count, kmeans, write_anchors,
};

#[derive(Parser, Debug)]
#[command(
    name = "yolo-anchors",
    version,
    about = "Do K-means anchor clustering on selected dataset"
)]
struct Args {
    /// Annotation txt file for ground truth boxes
    #[arg(long)]
    annotation_file: PathBuf,

    /// Number of anchors to cluster
    #[arg(long)]
    cluster_number: usize,

    /// Anchor file to output
    #[arg(long)]
    anchors_file: PathBuf,

    /// Model image input size as <height>x<width>
    #[arg(long, default_value = "608x608")]
    model_image_size: ModelInputSize,

    /// Seed for the initial cluster choice; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds even if assignments still change
    #[arg(long, default_value_t = yolo_anchors::clusterer::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Also print a JSON summary to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start = Instant::now();

    if !check_cluster_count(args.cluster_number) {
        warn!(
            cluster_number = args.cluster_number,
            "unusual anchor count, YOLO heads normally use 5, 6 or 9"
        );
    }
    let config = KMeansConfig::new(args.cluster_number, args.max_iterations)?;

    let mut extractor = BoxExtractor::new(ImageFileSizes, args.model_image_size);
    let boxes = extractor.extract_file(&args.annotation_file).with_context(|| {
        format!(
            "Failed to read boxes from {}",
            args.annotation_file.display()
        )
    })?;

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    info!(
        boxes = boxes.len(),
        k = config.k,
        model_image_size = %args.model_image_size,
        "running IoU k-means"
    );
    let result = kmeans(&boxes, &config, &mut rng)?;
    let anchors = result.sorted_centers();
    let accuracy = avg_iou(&boxes, &anchors);

    write_anchors(&args.anchors_file, &anchors).with_context(|| {
        format!("Failed to write anchors to {}", args.anchors_file.display())
    })?;

    info!(
        iterations = result.iterations,
        converged = result.converged,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "clustering done"
    );

    println!("K anchors:");
    for anchor in &anchors {
        println!(" {anchor}");
    }
    println!("Accuracy: {:.2}%", accuracy * 100.0);

    if args.json {
        let report = AnchorReport::new(&result, accuracy);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
