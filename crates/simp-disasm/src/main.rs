use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use simp_rs::listing::scan;

#[derive(Parser, Debug)]
#[command(author, version, about = "SIMP disassembler CLI", long_about = None)]
struct Cli {
    /// Input file, one 32-bit binary word per line
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_cli() -> Cli {
    // Usage errors exit with status 1; help/version keep clap's status
    Cli::try_parse().unwrap_or_else(|err| match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = parse_cli();
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input))?;
    let lines: Vec<&str> = text.lines().collect();
    let entries = scan(&lines);

    let rendered = match cli.format {
        OutputFormat::Text => {
            let mut buf = String::new();
            use std::fmt::Write as _;
            for e in &entries {
                let _ = writeln!(buf, "{}", e.render());
            }
            buf
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&entries)?;
            json.push('\n');
            json
        }
    };
    if let Some(path) = cli.out {
        std::fs::write(path, rendered)?;
    } else {
        print!("{rendered}");
    }

    Ok(())
}
