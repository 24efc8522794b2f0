use seagrass::{Graph, LayoutKind, Positions};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{Read, Write};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Layout(seagrass::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<seagrass::Error> for CliError {
    fn from(value: seagrass::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Kinds,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    kind: Option<String>,
    seed: Option<u32>,
    pretty: bool,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    positions: &'a Positions,
}

fn usage() -> &'static str {
    "seagrass-cli\n\
\n\
USAGE:\n\
  seagrass-cli [layout] [--type hierarchical|organic] [--config <json-file>] [--seed <n>] [--pretty] [<graph.json>|-]\n\
  seagrass-cli kinds\n\
\n\
NOTES:\n\
  - If <graph.json> is omitted or '-', the graph is read from stdin.\n\
  - The graph is `{\"nodes\": [{\"id\": ..}], \"edges\": [{\"source\": .., \"target\": ..}]}`;\n\
    edges may use `subject`/`object` instead of `source`/`target`.\n\
  - --config reads a layout configuration object; --type and --seed override its fields.\n\
    The layout type defaults to hierarchical.\n\
  - Set SEAGRASS_LOG (e.g. SEAGRASS_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "kinds" => args.command = Command::Kinds,
            "--pretty" => args.pretty = true,
            "--type" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.kind = Some(kind.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// The `--config` object (or `{}`) with command-line overrides applied.
fn layout_config(args: &Args) -> Result<Value, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Value::Object(Map::new()),
    };
    // Non-objects are left alone so the dispatcher reports them.
    if let Value::Object(map) = &mut config {
        if let Some(kind) = &args.kind {
            map.insert("type".to_string(), Value::from(kind.as_str()));
        }
        map.entry("type")
            .or_insert_with(|| Value::from(LayoutKind::Hierarchical.as_str()));
        if let Some(seed) = args.seed {
            map.insert("randomSeed".to_string(), Value::from(seed));
        }
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Kinds => {
            let mut out = std::io::stdout().lock();
            for kind in LayoutKind::ALL {
                writeln!(out, "{kind}")?;
            }
            Ok(())
        }
        Command::Layout => {
            let config = layout_config(&args)?;
            let text = read_input(args.input.as_deref())?;
            let graph: Graph = serde_json::from_str(&text)?;
            tracing::debug!(
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                "read graph"
            );

            let positions = seagrass::layout(&graph, &config)?;
            write_json(
                &LayoutOut {
                    positions: &positions,
                },
                args.pretty,
            )
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SEAGRASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
