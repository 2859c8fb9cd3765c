use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rv_app::{AppResult, IssueSeverity, RenderParams, build_scene, load_params, save_params};
use rv_field::TRANSITION_REYNOLDS;

#[derive(Parser)]
#[command(name = "rv-cli")]
#[command(about = "Reyview CLI - Reynolds number field exploration tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default parameter file
    Init {
        /// Path for the new params YAML file
        params_path: PathBuf,
    },
    /// Validate a parameter file
    Validate {
        /// Path to the params YAML file
        params_path: PathBuf,
    },
    /// Print a field summary for a parameter file
    Summary {
        /// Path to the params YAML file
        params_path: PathBuf,
    },
    /// Export computed data as CSV
    #[command(subcommand)]
    Export(ExportCommands),
}

#[derive(Subcommand)]
enum ExportCommands {
    /// Export the masked surface grid
    Surface {
        /// Path to the params YAML file
        params_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the fixed-diameter cross-section
    Section {
        /// Path to the params YAML file
        params_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { params_path } => cmd_init(&params_path),
        Commands::Validate { params_path } => cmd_validate(&params_path),
        Commands::Summary { params_path } => cmd_summary(&params_path),
        Commands::Export(export_cmd) => match export_cmd {
            ExportCommands::Surface {
                params_path,
                output,
            } => cmd_export_surface(&params_path, output.as_deref()),
            ExportCommands::Section {
                params_path,
                output,
            } => cmd_export_section(&params_path, output.as_deref()),
        },
    }
}

fn cmd_init(path: &Path) -> AppResult<()> {
    save_params(path, &RenderParams::default())?;
    println!("✓ Wrote default parameters to {}", path.display());
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating params: {}", path.display());
    let params = load_params(path)?;

    let issues = params.validate();
    if issues.is_empty() {
        println!("✓ Params are valid");
        return Ok(());
    }

    for issue in &issues {
        let tag = match issue.severity {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Error => "error",
        };
        println!("  [{}] {}", tag, issue.message);
    }

    params.ensure_valid()
}

fn cmd_summary(path: &Path) -> AppResult<()> {
    let params = load_params(path)?;
    let scene = build_scene(&params);

    let surface = &scene.surface.artifacts;
    let (rows, cols) = surface.reynolds.dim();
    println!("Grid: {} diameter x {} flow samples", rows, cols);
    println!(
        "Fluid: density {} kg/m3, viscosity {} Pa·s",
        params.fluid.density_kg_m3, params.fluid.viscosity_pa_s
    );
    println!(
        "Flow {} - {} mL/min, diameter {} - {} µm, display {} - {}",
        params.flow_range.min,
        params.flow_range.max,
        params.diameter_range.min,
        params.diameter_range.max,
        params.display_range.min,
        params.display_range.max
    );

    match surface.visible_range() {
        Some((lo, hi)) => println!("Visible Reynolds numbers: {:.1} - {:.1}", lo, hi),
        None => println!("Visible Reynolds numbers: none in display range"),
    }
    println!(
        "Visible points: {} of {}",
        surface.num_visible,
        surface.num_visible + surface.num_masked
    );
    println!(
        "Laminar share of visible points (Re < {}): {:.1}%",
        TRANSITION_REYNOLDS,
        100.0 * surface.laminar_fraction()
    );

    let section = &scene.section.section;
    println!(
        "Section at {} µm: {} of {} points visible",
        section.diameter_um,
        section.num_visible,
        section.flow_ml_min.len()
    );

    Ok(())
}

fn cmd_export_surface(path: &Path, output: Option<&Path>) -> AppResult<()> {
    let params = load_params(path)?;
    let scene = build_scene(&params);
    let surface = &scene.surface.artifacts;

    // Build CSV; masked entries export as empty fields
    let mut csv = String::from("flow_ml_min,diameter_um,reynolds\n");
    for ((i, j), re) in surface.reynolds.indexed_iter() {
        let value = if re.is_finite() {
            re.to_string()
        } else {
            String::new()
        };
        csv.push_str(&format!(
            "{},{},{}\n",
            surface.x[[i, j]],
            surface.y[[i, j]],
            value
        ));
    }

    write_csv(&csv, surface.reynolds.len(), output)
}

fn cmd_export_section(path: &Path, output: Option<&Path>) -> AppResult<()> {
    let params = load_params(path)?;
    let scene = build_scene(&params);
    let section = &scene.section.section;

    let mut csv = String::from("flow_ml_min,reynolds\n");
    for (q, re) in section.flow_ml_min.iter().zip(&section.reynolds) {
        let value = if re.is_finite() {
            re.to_string()
        } else {
            String::new()
        };
        csv.push_str(&format!("{},{}\n", q, value));
    }

    write_csv(&csv, section.flow_ml_min.len(), output)
}

/// Write to file or stdout.
fn write_csv(csv: &str, rows: usize, output: Option<&Path>) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} data points to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
