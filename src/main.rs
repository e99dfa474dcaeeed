use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod directive;
mod pipeline;
mod render;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "openapi-docs-gen")]
#[command(about = "Render docs.endpoint directives from an OpenAPI spec", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every `::: docs.endpoint` block in a Markdown document.
    Render {
        /// OpenAPI document, fully dereferenced (.json, .yaml or .yml).
        #[arg(long)]
        spec: String,

        /// Input Markdown document.
        #[arg(long = "in")]
        input: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Enable info-level logging.
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            spec,
            input,
            out,
            verbose,
        } => {
            // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
            let filter = if verbose {
                EnvFilter::new("info")
            } else {
                EnvFilter::from_default_env()
            };
            tracing_subscriber::fmt().with_env_filter(filter).init();

            // 1) Load + validate the OpenAPI document. Fatal before any page work.
            let resolved = spec::ResolvedSpec::load(&spec)?;

            // 2) Read the document.
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("read input document {}", input))?;

            // 3) Run the directive pipeline.
            let pipeline = pipeline::Pipeline::new(&resolved)?;
            let rendered = pipeline.render_document(&text);

            // 4) Write output.
            std::fs::write(&out, rendered)
                .with_context(|| format!("write output document {}", out))?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
