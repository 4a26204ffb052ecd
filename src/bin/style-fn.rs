use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use style_fn::{
    CompiledFunction, Feature, FunctionSpec, PropertyDescriptor, StopsValidator, compile_property,
    compile_validated, is_function, stringify,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "style-fn", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a style function at one zoom level, once per feature.
    Eval(EvalArgs),
    /// Print kind, interpolation and zoom stops of a compiled function.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Function JSON (a function object or a constant).
    #[arg(long)]
    function: PathBuf,

    /// Property descriptor JSON.
    #[arg(long)]
    property: PathBuf,

    /// Zoom level.
    #[arg(long, allow_negative_numbers = true)]
    zoom: f64,

    /// JSON array of `{"properties": {...}}` features.
    #[arg(long)]
    features: Option<PathBuf>,

    /// Evaluate features in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Function JSON (a function object or a constant).
    #[arg(long)]
    function: PathBuf,

    /// Property descriptor JSON.
    #[arg(long)]
    property: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse json '{}'", path.display()))
}

fn load(function: &Path, property: &Path) -> anyhow::Result<CompiledFunction> {
    let descriptor = PropertyDescriptor::from_json(&read_json(property)?)
        .with_context(|| format!("property descriptor '{}'", property.display()))?;

    let json = read_json(function)?;
    let compiled = if is_function(&json) {
        let spec = FunctionSpec::from_json(&json)?;
        let name = function
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        compile_validated(&spec, &descriptor, &name, &StopsValidator)
    } else {
        compile_property(&json, &descriptor)
    };
    compiled.with_context(|| format!("compile '{}'", function.display()))
}

fn render(value: Option<style_fn::Value>) -> String {
    value.map_or_else(|| "none".to_owned(), |v| stringify(&v))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    if args.threads == Some(0) {
        anyhow::bail!("--threads must be >= 1 when set");
    }
    let compiled = load(&args.function, &args.property)?;

    let Some(features_path) = &args.features else {
        println!("{}", render(compiled.evaluate(args.zoom, None)));
        return Ok(());
    };

    let features: Vec<Feature> = serde_json::from_value(read_json(features_path)?)
        .with_context(|| format!("features '{}'", features_path.display()))?;
    tracing::info!(
        features = features.len(),
        parallel = args.parallel,
        kind = ?compiled.kind(),
        "evaluating"
    );

    let lines: Vec<String> = if args.parallel {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = args.threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build().context("build rayon thread pool")?;
        pool.install(|| {
            features
                .par_iter()
                .map(|f| render(compiled.evaluate(args.zoom, Some(f))))
                .collect()
        })
    } else {
        features
            .iter()
            .map(|f| render(compiled.evaluate(args.zoom, Some(f))))
            .collect()
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let compiled = load(&args.function, &args.property)?;
    let report = serde_json::json!({
        "kind": compiled.kind(),
        "interpolation": compiled.interpolation(),
        "zoomStops": compiled.zoom_stops(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
