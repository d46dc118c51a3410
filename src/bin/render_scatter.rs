use std::fs;
use std::path::PathBuf;

use scatter_rs::api::{ChartVariant, ScatterChart, ScatterConfig};
use scatter_rs::core::Viewport;
use scatter_rs::loader::{DEFAULT_DATASET_URL, source_for_location};
use scatter_rs::render::{HtmlRenderer, NullRenderer, Renderer, SvgRenderer};
use tracing::info;

const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 800.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Html,
    Json,
}

#[derive(Debug)]
struct CliArgs {
    input: String,
    output: Option<PathBuf>,
    format: OutputFormat,
    variant: Option<ChartVariant>,
    viewport: Viewport,
    config_path: Option<PathBuf>,
    pointer: Option<(f64, f64)>,
}

fn main() {
    let _ = scatter_rs::telemetry::init_default_tracing("info");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ScatterConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterConfig::default(),
    };
    if let Some(variant) = args.variant {
        config.variant = variant;
    }

    let source = source_for_location(&args.input, config.load);
    let raw = source
        .load()
        .map_err(|err| format!("could not load dataset from {}: {err}", source.describe()))?;
    info!(source = %source.describe(), records = raw.len(), "dataset loaded");

    let document = match args.format {
        OutputFormat::Svg => {
            let mut chart = ScatterChart::from_raw(SvgRenderer::new(), config, args.viewport, &raw)
                .map_err(|err| err.to_string())?;
            apply_pointer(&mut chart, args.pointer)?;
            chart.render().map_err(|err| err.to_string())?;
            chart.into_renderer().into_document()
        }
        OutputFormat::Html => {
            let mut chart =
                ScatterChart::from_raw(HtmlRenderer::default(), config, args.viewport, &raw)
                    .map_err(|err| err.to_string())?;
            apply_pointer(&mut chart, args.pointer)?;
            chart.render().map_err(|err| err.to_string())?;
            chart.into_renderer().into_document()
        }
        OutputFormat::Json => {
            let mut chart =
                ScatterChart::from_raw(NullRenderer::default(), config, args.viewport, &raw)
                    .map_err(|err| err.to_string())?;
            apply_pointer(&mut chart, args.pointer)?;
            chart.render().map_err(|err| err.to_string())?;
            chart
                .frame_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}

fn apply_pointer<R: Renderer>(
    chart: &mut ScatterChart<R>,
    pointer: Option<(f64, f64)>,
) -> Result<(), String> {
    let Some((x, y)) = pointer else {
        return Ok(());
    };
    let events = chart.pointer_move(x, y).map_err(|err| err.to_string())?;
    info!(x, y, events = events.len(), "applied pointer position");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = DEFAULT_DATASET_URL.to_owned();
    let mut output = None;
    let mut format = OutputFormat::Svg;
    let mut variant = None;
    let mut viewport = Viewport::new(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1);
    let mut config_path = None;
    let mut pointer = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--input" => input = value_for("--input")?,
            "--output" => output = Some(PathBuf::from(value_for("--output")?)),
            "--format" => {
                format = match value_for("--format")?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "html" => OutputFormat::Html,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("unknown format `{other}`")),
                };
            }
            "--variant" => {
                variant = Some(match value_for("--variant")?.as_str() {
                    "doping" => ChartVariant::DopingScatter,
                    "time-series" => ChartVariant::TimeSeries,
                    other => return Err(format!("unknown variant `{other}`")),
                });
            }
            "--viewport" => {
                let (width, height) = parse_pair(&value_for("--viewport")?, 'x')?;
                viewport = Viewport::new(width, height);
            }
            "--config" => config_path = Some(PathBuf::from(value_for("--config")?)),
            "--pointer" => pointer = Some(parse_pair(&value_for("--pointer")?, ',')?),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }

    Ok(CliArgs {
        input,
        output,
        format,
        variant,
        viewport,
        config_path,
        pointer,
    })
}

fn parse_pair(raw: &str, separator: char) -> Result<(f64, f64), String> {
    let (left, right) = raw
        .split_once(separator)
        .ok_or_else(|| format!("expected `A{separator}B`, got `{raw}`"))?;
    let parse = |text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid number `{text}`: {err}"))
    };
    Ok((parse(left)?, parse(right)?))
}

fn print_usage() {
    println!(
        "render_scatter [--input <url|path>] [--output <path>] [--format svg|html|json]\n\
         \x20              [--variant doping|time-series] [--viewport WxH]\n\
         \x20              [--config <json>] [--pointer X,Y]"
    );
}
