//! # Composite Beam CLI
//!
//! Terminal host for the composite beam engine. Loads the section table,
//! runs either a saved project or the typical floor beam, and prints the
//! check summary, derivation trails and JSON.
//!
//! ```text
//! composite_cli [PROJECT.cbd] [--section LABEL] [--sections PATH] [--json] [--save PATH]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use composite_core::calculations::{calculate_with, CalculationItem, CompositeBeamResult, DesignInput};
use composite_core::errors::{CalcError, CalcResult};
use composite_core::file_io::{load_project, save_project};
use composite_core::logging;
use composite_core::materials::SectionCatalog;
use composite_core::project::Project;

const USAGE: &str = "\
Usage: composite_cli [PROJECT.cbd] [OPTIONS]

Options:
  --section LABEL   Steel section for the typical floor beam (default W18X35)
  --sections PATH   Section dataset CSV (default: $COMPOSITE_SECTIONS_CSV, assets/w_sections.csv)
  --json            Print results as JSON
  --save PATH       Save the evaluated beam(s) as a project file
  -h, --help        Show this message";

#[derive(Debug, Default)]
struct Args {
    project: Option<PathBuf>,
    section: Option<String>,
    sections: Option<PathBuf>,
    json: bool,
    save: Option<PathBuf>,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("{} requires a value", flag));
        match arg.as_str() {
            "--section" => parsed.section = Some(value("--section")?),
            "--sections" => parsed.sections = Some(PathBuf::from(value("--sections")?)),
            "--save" => parsed.save = Some(PathBuf::from(value("--save")?)),
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path if parsed.project.is_none() => parsed.project = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument: {}", extra)),
        }
    }
    Ok(parsed)
}

/// Project to evaluate: the file given on the command line, or a new one
/// holding the typical floor beam with the selected section.
fn build_project(args: &Args, catalog: &SectionCatalog) -> CalcResult<Project> {
    if let Some(path) = &args.project {
        return load_project(path);
    }

    let label = args.section.as_deref().unwrap_or("W18X35");
    let beam = catalog.lookup(label)?;
    let mut project = Project::new("", "", "");
    project.add_item(CalculationItem::CompositeBeam(
        DesignInput::typical_floor_beam().with_section(beam),
    ));
    Ok(project)
}

fn print_result(result: &CompositeBeamResult) {
    println!("═══════════════════════════════════════");
    for line in result.summary_lines() {
        println!("{}", line);
    }
    println!("═══════════════════════════════════════");

    for (stage, trail) in result.derivations() {
        println!();
        println!("{}", stage);
        for step in trail.iter() {
            println!("  {}", step.display_line());
        }
    }
    println!();
}

fn report_error(error: &CalcError) {
    eprintln!("Error [{}]: {}", error.error_code(), error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!("{}", json);
    }
}

fn run(args: &Args) -> CalcResult<bool> {
    let catalog = match &args.sections {
        Some(path) => SectionCatalog::with_path(path),
        None => SectionCatalog::new(),
    };
    let source = catalog.table().source();
    tracing::info!(sections = catalog.table().len(), ?source, "section table ready");

    let project = build_project(args, &catalog)?;
    let settings = project.settings.design;

    let mut all_pass = true;
    let mut results = Vec::new();
    for (_, item) in project.items_by_label() {
        match item {
            CalculationItem::CompositeBeam(input) => match calculate_with(input, &settings) {
                Ok(result) => {
                    all_pass &= result.passes();
                    if !args.json {
                        print_result(&result);
                    }
                    results.push(result);
                }
                Err(e) => {
                    all_pass = false;
                    eprintln!("{}: calculation failed", item.label());
                    report_error(&e);
                }
            },
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&results).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    }

    if let Some(path) = &args.save {
        save_project(&project, path)?;
        println!("Saved {} item(s) to {}", project.item_count(), path.display());
    }

    Ok(all_pass)
}

fn main() -> ExitCode {
    logging::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            report_error(&e);
            ExitCode::from(2)
        }
    }
}
