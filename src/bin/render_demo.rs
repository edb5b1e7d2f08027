use std::fs;
use std::path::PathBuf;

use binchart::api::{ChartConfig, ChartEngine};
use binchart::core::{Color, ValueKind, records_from_json};
use binchart::render::SvgRenderer;

const DEFAULT_OUTPUT_DIR: &str = "demo_output";

const INT_HISTOGRAM_DATA: &str = r#"[
    {"value":"5"},{"value":"1"},{"value":"35"},{"value":"55"},{"value":"6"},
    {"value":"3"},{"value":"34"},{"value":"76"},{"value":"23"},{"value":"64"},
    {"value":"23"},{"value":"1"},{"value":"3"},{"value":"6"},{"value":"14"},
    {"value":"13"},{"value":"11"},{"value":"25"},{"value":"35"},{"value":"45"},
    {"value":"55"},{"value":"25"},{"value":"34"},{"value":"54"},{"value":"53"},
    {"value":"52"},{"value":"51"},{"value":"45"},{"value":"47"},{"value":"36"},
    {"value":"39"},{"value":"8"},{"value":"19"},{"value":"56"},{"value":"87"},
    {"value":"76"},{"value":"74"},{"value":"73"},{"value":"26"},{"value":"45"}
]"#;

const DATE_HISTOGRAM_DATA: &str = r#"[
    {"value":"2004-04-15"},{"value":"2004-11-01"},{"value":"2005-01-21"},
    {"value":"2005-01-22"},{"value":"2005-02-17"},{"value":"2005-05-01"},
    {"value":"2005-06-21"},{"value":"2005-07-01"},{"value":"2005-07-12"},
    {"value":"2005-07-14"}
]"#;

const DATE_BAR_DATA: &str = r#"[
    {"start_date":"2004-04-07","value":2},{"start_date":"2004-04-09","value":2},
    {"start_date":"2004-04-12","value":2},{"start_date":"2004-04-13","value":2},
    {"start_date":"2004-04-14","value":2},{"start_date":"2004-04-15","value":2},
    {"start_date":"2004-04-16","value":6},{"start_date":"2004-04-17","value":2},
    {"start_date":"2004-04-18","value":10},{"start_date":"2004-04-19","value":8}
]"#;

#[derive(Debug)]
struct CliArgs {
    output_dir: PathBuf,
}

fn main() {
    let _ = binchart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let base = ChartConfig::default().with_colour(
        Color::WHITE,
        Color::from_rgb8(20, 183, 239),
    );
    let charts = [
        (
            "Integer histogram",
            false,
            ChartConfig {
                id: "histogramInt".to_owned(),
                ..base.clone()
            }
            .with_bin_count(10)
            .with_show_counts(true),
            INT_HISTOGRAM_DATA,
        ),
        (
            "Date histogram",
            false,
            ChartConfig {
                id: "histogramDate".to_owned(),
                ..base.clone()
            }
            .with_bin_count(10)
            .with_value_kind(ValueKind::Date),
            DATE_HISTOGRAM_DATA,
        ),
        (
            "Date bar chart",
            true,
            ChartConfig {
                id: "bargraphDate".to_owned(),
                ..base
            }
            .with_value_kind(ValueKind::Date),
            DATE_BAR_DATA,
        ),
    ];

    let mut sections = String::new();
    for (title, is_bar, config, data) in charts {
        let id = config.id.clone();
        let records = records_from_json(data).map_err(|err| format!("{id}: {err}"))?;
        let mut engine = if is_bar {
            ChartEngine::bar_chart(SvgRenderer::new(), config)
        } else {
            ChartEngine::histogram(SvgRenderer::new(), config)
        }
        .map_err(|err| format!("{id}: {err}"))?;

        engine
            .plot(&records)
            .map_err(|err| format!("{id}: render failed: {err}"))?;
        engine
            .finish_transition()
            .map_err(|err| format!("{id}: render failed: {err}"))?;

        let svg_path = args.output_dir.join(format!("{id}.svg"));
        engine
            .renderer()
            .save(&svg_path)
            .map_err(|err| format!("{id}: {err}"))?;
        let document = engine.renderer().last_document().unwrap_or_default();
        sections.push_str(&format!("<section>\n<h2>{title}</h2>\n{document}\n</section>\n"));
        println!("wrote {}", svg_path.display());
    }

    let index_path = args.output_dir.join("index.html");
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>binchart demo</title>\n</head>\n<body>\n{sections}</body>\n</html>\n"
    );
    fs::write(&index_path, html)
        .map_err(|err| format!("failed to write `{}`: {err}", index_path.display()))?;
    println!("wrote {}", index_path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs { output_dir })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_demo -- [options]\n\nOptions:\n  --output-dir <path>   Directory for index.html and chart svgs (default: {DEFAULT_OUTPUT_DIR})\n  -h, --help            Show this message"
    )
}
