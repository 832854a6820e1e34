use anyhow::Result;
use clap::Parser;
use longpath_expander::ShortPathExpander;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "longpath")]
#[command(about = "Expand Windows 8.3 short-name path components", long_about = None)]
#[command(version)]
struct Cli {
    /// Paths to expand
    #[arg(required = true)]
    paths: Vec<String>,

    /// Emit one JSON record per path (stdout is reserved for output)
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct ExpandRecord<'a> {
    input: &'a str,
    expanded: &'a str,
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let expander = ShortPathExpander::new();
    for input in &cli.paths {
        let expanded = expander.expand(input).await;
        log::debug!("expanded {input} -> {expanded}");
        if cli.json {
            let record = ExpandRecord {
                input,
                expanded: &expanded,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{expanded}");
        }
    }
    Ok(())
}
