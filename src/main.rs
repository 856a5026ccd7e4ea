use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use viewfilter_core::FilterSet;
use viewfilter_scene::Scene;

/// Filters a reconstruction scene down to a whitelisted set of views,
/// renumbering the surviving neighbor edges.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input scene.
    input_file: PathBuf,

    /// Path to the whitelist of view names to retain.
    #[arg(short, long)]
    filter_file: PathBuf,

    /// Path for the filtered scene. Defaults to `<input>_filtered.mvs`.
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// File type used to export the scene mesh.
    #[arg(long, value_enum, default_value = "ply")]
    export_type: ExportType,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExportType {
    Ply,
    Obj,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let logfile = tracing_appender::rolling::daily("./logs", "viewfilter.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("VIEWFILTER_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(std::io::stdout))
        .with_env_filter(env_filter)
        .init();

    // The whitelist is loaded before the scene so that a missing or
    // unreadable filter file aborts the run with no scene I/O at all.
    let filter = FilterSet::load(&args.filter_file)
        .with_context(|| format!("reading whitelist {}", args.filter_file.display()))?;
    info!("whitelist holds {} view names", filter.len());

    let mut scene = Scene::load_from_file(&args.input_file)
        .with_context(|| format!("loading scene {}", args.input_file.display()))?;
    info!("loaded scene with {} views", scene.views.len());

    let start = Instant::now();
    let report = viewfilter_core::filter_scene(&mut scene, &filter)?;
    info!(
        "retained {} of {} views, dropped {} stale neighbor edges ({:?})",
        report.retained,
        report.total,
        report.total_dropped_edges(),
        start.elapsed()
    );

    let output = args
        .output_file
        .unwrap_or_else(|| default_output(&args.input_file));
    scene
        .save_to_file(&output)
        .with_context(|| format!("saving scene {}", output.display()))?;

    if scene.mesh.is_empty() {
        warn!("scene has no mesh, skipping mesh export");
    } else {
        let mesh_path = match args.export_type {
            ExportType::Ply => output.with_extension("ply"),
            ExportType::Obj => output.with_extension("obj"),
        };
        match args.export_type {
            ExportType::Ply => scene.mesh.save_ply(&mesh_path),
            ExportType::Obj => scene.mesh.save_obj(&mesh_path),
        }
        .with_context(|| format!("exporting mesh {}", mesh_path.display()))?;
    }

    info!("saved filtered scene to {}", output.display());
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();
    input.with_file_name(format!("{stem}_filtered.mvs"))
}
