use {
    posture_base::{LogConfig, init_logger, log, log_fatal},
    posture_metrics::*,
    serde::Deserialize,
};

/// A detection document holds either one detection or an image's full list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    One(Detection),
    Many(Vec<Detection>),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let mut log_config = LogConfig::default();
    if let Some(dir) = args.get(3) {
        log_config = log_config.with_dir(dir);
    }
    init_logger(&log_config)?;

    if args.len() < 3 {
        log_fatal!("Usage: {} <detection.json> <height-mm> [log-dir]", args[0]);
    }
    let input_path = &args[1];
    let height: f64 = match args[2].parse() {
        Ok(height) => height,
        Err(_) => log_fatal!("height must be a number in millimetres, got {:?}", args[2]),
    };
    validate_height(height)?;

    log::info!("reading detections from {}", input_path);
    let content = std::fs::read_to_string(input_path).map_err(PostureError::from)?;
    let input: Input = serde_json::from_str(&content).map_err(PostureError::from)?;

    let config = PostureConfig::default();
    let report = match input {
        Input::One(detection) => Some(analyze_detection(&detection, height, &config)?),
        Input::Many(detections) => analyze_first(&detections, height, &config)?,
    };

    match report {
        Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
        None => log::warn!("no subject detected in {}", input_path),
    }
    Ok(())
}
