use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser, ValueEnum};
use dialoguer::Select;

use oxroute::{Graph, analysis_payload, analyze_routes, format_matrix, render_text};

#[derive(Debug, Parser)]
#[command(
    name = "oxroute",
    about = "Analyze weighted routes between two nodes of a small labeled graph."
)]
struct AnalyzeArgs {
    /// Path to the input graph definition. Use '-' to read from stdin.
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Origin node label. Prompted interactively when omitted.
    #[arg(long = "from")]
    from: Option<String>,

    /// Destination node label. Prompted interactively when omitted.
    #[arg(long = "to")]
    to: Option<String>,

    /// Bound on the number of edges per enumerated route.
    #[arg(long = "max-length")]
    max_length: Option<usize>,

    /// Output format for the route report.
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: ReportFormat,

    /// Path to the output file. Defaults to stdout; '-' forces stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Also print the adjacency matrix of the loaded graph (text format only).
    #[arg(long = "show-matrix", action = ArgAction::SetTrue)]
    show_matrix: bool,

    /// Suppress informational output.
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
enum OutputDestination {
    Stdout,
    File(PathBuf),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("\u{001b}[31merror:\u{001b}[0m {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = AnalyzeArgs::parse();

    if cli.show_matrix && cli.format == ReportFormat::Json {
        bail!("--show-matrix is only available with the text format");
    }

    let input_source = parse_input(cli.input.as_deref())?;
    let output_dest = parse_output(cli.output.as_deref())?;

    let definition = load_definition(&input_source)?;
    let graph = Graph::parse(&definition)?;

    let source = resolve_endpoint(cli.from, "origin", &graph, &input_source)?;
    let target = resolve_endpoint(cli.to, "destination", &graph, &input_source)?;

    let analysis = analyze_routes(&graph, &source, &target, cli.max_length)?;

    let report = match cli.format {
        ReportFormat::Text => {
            let mut report = String::new();
            if cli.show_matrix {
                let (labels, matrix) = graph.to_matrix();
                report.push_str(&format_matrix(&labels, &matrix));
                report.push('\n');
            }
            report.push_str(&render_text(&graph, &source, &target, &analysis));
            report
        }
        ReportFormat::Json => {
            let payload = analysis_payload(&graph, &source, &target, &analysis);
            let mut report = serde_json::to_string_pretty(&payload)?;
            report.push('\n');
            report
        }
    };

    write_output(output_dest, report.as_bytes(), cli.quiet)?;
    Ok(())
}

fn parse_input(input: Option<&str>) -> Result<InputSource> {
    match input {
        Some("-") | None => Ok(InputSource::Stdin),
        Some(path_str) => {
            let path = PathBuf::from(path_str);
            if !path.exists() {
                return Err(anyhow!("input file '{path_str}' does not exist"));
            }
            Ok(InputSource::File(path))
        }
    }
}

fn parse_output(output: Option<&str>) -> Result<OutputDestination> {
    match output {
        Some("-") | None => Ok(OutputDestination::Stdout),
        Some(path_str) => {
            let path = PathBuf::from(path_str);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(anyhow!(
                        "output directory '{}' does not exist",
                        parent.display()
                    ));
                }
            }
            Ok(OutputDestination::File(path))
        }
    }
}

fn load_definition(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            if buffer.trim().is_empty() {
                Err(anyhow!("no graph definition supplied on stdin"))
            } else {
                Ok(buffer)
            }
        }
        InputSource::File(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            if contents.trim().is_empty() {
                Err(anyhow!("input file '{}' was empty", path.display()))
            } else {
                Ok(contents)
            }
        }
    }
}

fn resolve_endpoint(
    flag: Option<String>,
    role: &str,
    graph: &Graph,
    input_source: &InputSource,
) -> Result<String> {
    if let Some(label) = flag {
        return Ok(label);
    }

    if *input_source == InputSource::Stdin || !io::stdin().is_terminal() {
        bail!("--from and --to are required when there is no terminal to prompt on");
    }

    let labels: Vec<String> = graph.nodes().map(str::to_string).collect();
    let selection = Select::new()
        .with_prompt(format!("Select the {role} node"))
        .items(&labels)
        .default(0)
        .interact()
        .with_context(|| format!("{role} selection was cancelled"))?;

    Ok(labels[selection].clone())
}

fn write_output(dest: OutputDestination, bytes: &[u8], quiet: bool) -> Result<()> {
    match dest {
        OutputDestination::Stdout => {
            let mut stdout = io::stdout();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
        OutputDestination::File(path) => {
            fs::write(&path, bytes)?;
            if !quiet {
                println!("Wrote route report -> {}", path.display());
            }
        }
    }
    Ok(())
}
