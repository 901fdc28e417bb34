mod session;

use clap::{Parser, Subcommand, ValueEnum};
use ng_case::{CaseReport, CaseResult, Quantity, check_species, parse_quantity, run_case};
use ng_eos::{Composition, EosEngine, EosKind, StateConditions, filter_species_catalog};
use session::{ConditionsInput, Screen, Session};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ng")]
#[command(about = "Natural-gas volumetric properties from cubic equations of state", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List species in the reference table
    Species {
        /// Filter by name, formula or alias
        query: Option<String>,
    },
    /// Evaluate one state
    Eval {
        /// Component as NAME=FRACTION (repeatable), e.g. -c Methane=0.9
        #[arg(short, long = "component", value_parser = parse_component, required = true)]
        components: Vec<(String, String)>,
        /// Pressure, e.g. "50 bar" (bare number = Pa)
        #[arg(short, long)]
        pressure: String,
        /// Temperature, e.g. "15 C" (bare number = K)
        #[arg(short, long)]
        temperature: String,
        /// Equation of state
        #[arg(long, default_value_t = EosKind::VanDerWaals)]
        eos: EosKind,
    },
    /// Run a case file (YAML or JSON)
    Run {
        /// Path to the case file
        case_path: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Step through component selection, conditions and results
    Interactive {
        /// Equation of state
        #[arg(long, default_value_t = EosKind::VanDerWaals)]
        eos: EosKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn parse_component(s: &str) -> Result<(String, String), String> {
    let (name, fraction) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FRACTION, got '{s}'"))?;
    Ok((name.trim().to_string(), fraction.trim().to_string()))
}

fn main() -> CaseResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Species { query } => cmd_species(query.as_deref().unwrap_or("")),
        Commands::Eval {
            components,
            pressure,
            temperature,
            eos,
        } => cmd_eval(&components, &pressure, &temperature, eos),
        Commands::Run { case_path, format } => cmd_run(&case_path, format),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Interactive { eos } => cmd_interactive(eos),
    }
}

fn cmd_species(query: &str) -> CaseResult<()> {
    let entries = filter_species_catalog(query);
    if entries.is_empty() {
        println!("No species match '{}'", query);
        return Ok(());
    }

    println!(
        "{:<18} {:<22} {:>9} {:>11} {:>7} {:>10}",
        "ID", "Name", "Tc [K]", "Pc [MPa]", "ω", "M [g/mol]"
    );
    for entry in entries {
        println!(
            "{:<18} {:<22} {:>9.2} {:>11.4} {:>7.3} {:>10.3}",
            entry.canonical_id,
            entry.display_name,
            entry.critical_temperature_k,
            entry.critical_pressure_pa / 1e6,
            entry.acentric_factor,
            entry.molar_mass_kg_per_mol * 1e3,
        );
    }
    Ok(())
}

fn cmd_eval(components: &[(String, String)], pressure: &str, temperature: &str, eos: EosKind) -> CaseResult<()> {
    let mut fractions = Vec::with_capacity(components.len());
    for (name, text) in components {
        fractions.push((name.as_str(), parse_quantity(text, Quantity::Fraction)?));
    }
    let composition = Composition::new(fractions)?;

    let p = parse_quantity(pressure, Quantity::Pressure)?;
    let t = parse_quantity(temperature, Quantity::Temperature)?;
    let conditions = StateConditions::from_si(p, t)?;

    let result = EosEngine::builtin().with_eos(eos).evaluate(&composition, &conditions)?;

    println!("{} at {:.1} Pa, {:.2} K", eos.label(), p, t);
    println!("{}", result.summary());
    Ok(())
}

fn cmd_run(case_path: &Path, format: OutputFormat) -> CaseResult<()> {
    let case = ng_case::load(case_path)?;
    let report = run_case(&case)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &CaseReport) {
    println!("✓ Case '{}' ({})", report.name, report.eos.label());
    println!("  P = {:.1} Pa, T = {:.2} K", report.pressure_pa, report.temperature_k);
    println!("  Molar volume:  {:.6e} m³/mol", report.result.molar_volume_m3_per_mol);
    println!("  Z:             {:.6}", report.result.compressibility_factor);
    println!("  Density:       {:.6} kg/m³", report.result.density_kg_m3);

    if let Some(sweep) = &report.sweep {
        println!(
            "\nSweep over {} ({} ok, {} failed):",
            sweep.variable, sweep.num_successful, sweep.num_failed
        );
        println!("  {:>14} {:>14} {:>10} {:>12}", "value", "Vm [m³/mol]", "Z", "ρ [kg/m³]");
        for point in &sweep.points {
            match (&point.result, &point.error) {
                (Some(r), _) => println!(
                    "  {:>14.6e} {:>14.6e} {:>10.6} {:>12.6}",
                    point.value, r.molar_volume_m3_per_mol, r.compressibility_factor, r.density_kg_m3
                ),
                (None, error) => println!(
                    "  {:>14.6e}  failed: {}",
                    point.value,
                    error.as_deref().unwrap_or("unknown error")
                ),
            }
        }
    }
}

fn cmd_validate(case_path: &Path) -> CaseResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = ng_case::load(case_path)?;
    check_species(&case)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_interactive(eos: EosKind) -> CaseResult<()> {
    let mut session = Session::new(EosEngine::builtin().with_eos(eos));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{} interactive mode. Type 'quit' to exit.", eos.label());
    loop {
        match session.screen() {
            Screen::SelectingComponents => {
                let Some(line) = prompt(&mut lines, "Components (comma separated, 'list' to browse): ")? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("list") {
                    cmd_species("")?;
                    continue;
                }
                let names: Vec<&str> = line.split(',').collect();
                if let Err(err) = session.select(&names) {
                    println!("✗ {err}");
                }
            }
            Screen::EnteringConditions => {
                println!("  Type 'back' to choose other components.");
                let mut questions: Vec<String> = session
                    .selected()
                    .iter()
                    .map(|name| format!("  Mole fraction of {name}: "))
                    .collect();
                questions.push("  Pressure (e.g. 50 bar): ".to_string());
                questions.push("  Temperature (e.g. 15 C): ".to_string());

                let mut answers = Vec::with_capacity(questions.len());
                for question in &questions {
                    let Some(answer) = prompt(&mut lines, question)? else {
                        return Ok(());
                    };
                    if answer.eq_ignore_ascii_case("back") {
                        break;
                    }
                    answers.push(answer);
                }
                if answers.len() < questions.len() {
                    session.reset();
                    continue;
                }

                let temperature = answers.pop().unwrap_or_default();
                let pressure = answers.pop().unwrap_or_default();
                let input = ConditionsInput {
                    fractions: answers,
                    pressure,
                    temperature,
                };
                if let Err(err) = session.submit(&input) {
                    println!("✗ {err}");
                }
            }
            Screen::ShowingResults => {
                if let Some(result) = session.result() {
                    println!("{}", result.summary());
                }
                let Some(_) = prompt(&mut lines, "Press Enter for a new calculation: ")? else {
                    return Ok(());
                };
                session.reset();
            }
        }
    }
}

/// Read one trimmed line. `None` on end of input or "quit".
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next().transpose()? {
        Some(line) if line.trim().eq_ignore_ascii_case("quit") => Ok(None),
        Some(line) => Ok(Some(line.trim().to_string())),
        None => Ok(None),
    }
}
