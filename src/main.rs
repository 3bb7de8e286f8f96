use edge_map::filter::{sobel_edge_map, SobelParams};
use edge_map::image::io::{load_rgb_image, save_image};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = args.next().ok_or_else(usage)?;
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("edges.png"));

    let buffer = load_rgb_image(Path::new(&input)).map_err(|e| e.to_string())?;
    let params = SobelParams::default();
    let (edges, report) = sobel_edge_map(buffer.as_view(), &params).map_err(|e| e.to_string())?;
    save_image(&edges, &output).map_err(|e| e.to_string())?;

    println!(
        "Saved {}x{} edge map to {} ({} workers, {:.3} ms)",
        edges.width(),
        edges.height(),
        output.display(),
        report.workers,
        report.elapsed_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge-map <input-image> [output-image]".to_string()
}
