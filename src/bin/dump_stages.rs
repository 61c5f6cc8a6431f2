use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use text_orientation::classify::classify;
use text_orientation::energy;
use text_orientation::grayscale;
use text_orientation::image::io::{load_pixel_buffer, save_gray_png, write_json_file};
use text_orientation::rescale::rescale;
use text_orientation::OrientationParams;

#[derive(Debug, Deserialize)]
pub struct DumpToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: OrientationParams,
    pub output: DumpOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DumpOutputConfig {
    #[serde(rename = "working_image")]
    pub working_image: PathBuf,
    #[serde(rename = "blurred_image")]
    pub blurred_image: PathBuf,
    #[serde(rename = "horizontal_edges_image")]
    pub horizontal_edges_image: PathBuf,
    #[serde(rename = "vertical_edges_image")]
    pub vertical_edges_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DumpToolConfig, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let params = config.params.validated();

    let raw = load_pixel_buffer(&config.input).map_err(|e| e.to_string())?;
    let gray = grayscale::normalize(raw).map_err(|e| e.to_string())?;
    let small = rescale(&gray, params.target_width).map_err(|e| e.to_string())?;
    let images = energy::analyze_images(&small, params.kernel_size, params.sigma);
    let verdict = classify(images.energy, params.decision_factor);

    save_gray_png(&small, &config.output.working_image)?;
    save_gray_png(&images.blurred, &config.output.blurred_image)?;
    save_gray_png(&images.horizontal, &config.output.horizontal_edges_image)?;
    save_gray_png(&images.vertical, &config.output.vertical_edges_image)?;

    let summary = StageSummary {
        input: config.input.display().to_string(),
        working_width: small.width(),
        working_height: small.height(),
        mean_horizontal: images.energy.mean_horizontal,
        mean_vertical: images.energy.mean_vertical,
        orientation_id: verdict.orientation.id(),
        orientation_name: verdict.orientation.name(),
        confidence: verdict.confidence,
    };
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved stage images for {} ({}x{} working scale)",
        config.input.display(),
        small.width(),
        small.height()
    );
    println!(
        "{}: {} (confidence {:.2})",
        config.output.summary_json.display(),
        summary.orientation_name,
        summary.confidence
    );

    Ok(())
}

fn usage() -> String {
    "Usage: dump_stages <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StageSummary {
    input: String,
    working_width: usize,
    working_height: usize,
    mean_horizontal: f32,
    mean_vertical: f32,
    orientation_id: i32,
    orientation_name: &'static str,
    confidence: f32,
}
