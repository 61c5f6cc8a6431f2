use log::{error, warn};
use std::env;
use std::path::Path;
use text_orientation::detector::load_params;
use text_orientation::report::{self, ReportOptions};
use text_orientation::{OrientationDetector, OrientationParams, OrientationResult};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

struct CliOptions {
    image: String,
    report: ReportOptions,
    render: bool,
    params: OrientationParams,
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let detector = OrientationDetector::new(options.params);
    let result = match detector.process_file(Path::new(&options.image)) {
        Ok(result) => result,
        Err(err) => {
            // A failed run still reports: ERROR verdict, confidence 0.
            error!("classification failed: {err}");
            OrientationResult::error()
        }
    };

    report::emit(
        &options.image,
        result.orientation,
        result.confidence,
        options.report,
    )
    .map_err(|e| e.to_string())?;

    if options.render {
        warn!("display rendering is not available in this build; exiting");
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    // Defaults mirror the reference tool: sample image, reports off,
    // render on.
    let mut options = CliOptions {
        image: "test1.tiff".to_string(),
        report: ReportOptions::default(),
        render: true,
        params: OrientationParams::default(),
    };
    match args.len() {
        0 => {}
        1 => options.image = args[0].clone(),
        4 | 5 => {
            options.image = args[0].clone();
            options.report.emit_console = flag(&args[1]);
            options.report.emit_file = flag(&args[2]);
            options.render = flag(&args[3]);
            if let Some(path) = args.get(4) {
                options.params = load_params(Path::new(path))?;
            }
        }
        _ => return Err(usage()),
    }
    Ok(options)
}

/// A flag argument is true when its first byte is `1`.
fn flag(arg: &str) -> bool {
    arg.as_bytes().first() == Some(&b'1')
}

fn usage() -> String {
    "Usage: text-orientation [IMAGE [STDOUT01 XML01 RENDER01] [PARAMS.json]]".to_string()
}
