use clap::{Parser, Subcommand};
use sld_app::{AppResult, Report, ReportFormat, assess_file, assess_files, impact_from_area_file};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sld-cli")]
#[command(about = "SLD risk analyzer - topology rules and feeder criticality for single-line diagrams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a diagram file and assemble its graph
    Validate {
        /// Path to the diagram file (.yaml, .yml or .json)
        diagram_path: PathBuf,
    },
    /// Evaluate a diagram and print the risk report
    Assess {
        /// Path to the diagram file (.yaml, .yml or .json)
        diagram_path: PathBuf,
        /// Output format: text, json or yaml
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
        /// Feeder -> area table for the geographic impact section
        #[arg(long)]
        areas: Option<PathBuf>,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Explain why a component is involved in the report
    Explain {
        /// Path to the diagram file
        diagram_path: PathBuf,
        /// Component ID to explain
        component_id: String,
    },
    /// List the rule table
    Rules,
    /// Evaluate several diagrams in parallel
    Batch {
        /// Paths to diagram files
        #[arg(required = true)]
        diagram_paths: Vec<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { diagram_path } => cmd_validate(&diagram_path),
        Commands::Assess {
            diagram_path,
            format,
            areas,
            output,
        } => cmd_assess(&diagram_path, format, areas.as_deref(), output.as_deref()),
        Commands::Explain {
            diagram_path,
            component_id,
        } => cmd_explain(&diagram_path, &component_id),
        Commands::Rules => cmd_rules(),
        Commands::Batch { diagram_paths } => cmd_batch(&diagram_paths),
    }
}

fn cmd_validate(diagram_path: &Path) -> AppResult<()> {
    println!("Validating diagram: {}", diagram_path.display());
    let diagram = sld_project::load_diagram(diagram_path)?;
    let graph = sld_project::build_graph(&diagram)?;
    println!(
        "✓ Diagram is valid ({} components, {} connections)",
        graph.len(),
        graph.connections().len()
    );
    Ok(())
}

fn cmd_assess(
    diagram_path: &Path,
    format: ReportFormat,
    areas: Option<&Path>,
    output: Option<&Path>,
) -> AppResult<()> {
    let eval = assess_file(diagram_path)?;
    let gis = match areas {
        Some(path) => Some(impact_from_area_file(&eval, path)?),
        None => None,
    };

    let rendered = Report::new(&eval, gis).render(format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_explain(diagram_path: &Path, component_id: &str) -> AppResult<()> {
    let eval = assess_file(diagram_path)?;
    let exp = sld_app::explain_component(&eval.graph, &eval.assessment, component_id)?;

    println!("Component: {}", exp.id);
    match &exp.kind {
        Some(kind) => println!("  Type: {} - {}", kind, kind.meaning()),
        None => println!("  Type: —"),
    }
    println!("  Voltage: {}", exp.voltage.as_deref().unwrap_or("—"));

    if let Some(score) = exp.score {
        println!(
            "  Criticality: {} (score {} = {} loads + {} voltage tier {:+} backup)",
            score.level, score.score, score.loads, score.voltage_score, score.backup_penalty
        );
    }

    if exp.is_involved() {
        println!("Involved in:");
        for f in &exp.findings {
            println!("  {} [{} {}%] {}", f.rule, f.severity, f.confidence, f.why);
        }
    } else {
        println!("✓ This component is not involved in any detected risk");
    }
    Ok(())
}

fn cmd_rules() -> AppResult<()> {
    println!("{:<28} {:<8} {:>5}  IMPACT", "RULE", "SEVERITY", "CONF");
    for rule in sld_rules::rules() {
        println!(
            "{:<28} {:<8} {:>4}%  {}",
            rule.id.as_str(),
            rule.severity.as_str(),
            rule.confidence,
            rule.impact
        );
    }
    Ok(())
}

fn cmd_batch(diagram_paths: &[PathBuf]) -> AppResult<()> {
    let results = assess_files(diagram_paths);
    let mut failures = 0usize;
    for (path, result) in diagram_paths.iter().zip(results) {
        match result {
            Ok(eval) => {
                let s = eval.assessment.summary;
                println!(
                    "✓ {}: {} findings (high {}, medium {}, low {})",
                    path.display(),
                    s.total,
                    s.high,
                    s.medium,
                    s.low
                );
            }
            Err(err) => {
                failures += 1;
                println!("✗ {}: {}", path.display(), err);
            }
        }
    }

    tracing::info!(failures, total = diagram_paths.len(), "batch finished");
    if failures > 0 {
        eprintln!("{failures} of {} diagrams failed", diagram_paths.len());
        std::process::exit(1);
    }
    Ok(())
}
