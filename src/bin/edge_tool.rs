use edge_map::config::load_config;
use edge_map::filter::sobel_edge_map;
use edge_map::image::io::{load_rgb_image, save_image};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let buffer = load_rgb_image(&config.input).map_err(|e| e.to_string())?;
    let params = config.filter.to_params();
    let (edges, report) = sobel_edge_map(buffer.as_view(), &params).map_err(|e| e.to_string())?;
    save_image(&edges, &config.output).map_err(|e| e.to_string())?;

    println!(
        "Saved edge map to {} ({} workers, {:.3} ms)",
        config.output.display(),
        report.workers,
        report.elapsed_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_tool <config.json>".to_string()
}
