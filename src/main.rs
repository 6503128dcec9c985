use clap::{Parser, Subcommand};
use lootpixel::{
    JsonLinkStore, PipelineError, PlannerBuilder, PlannerConfig, import_svg_anchors,
    import_template_links, product_id_from_code,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Builds Loot Pixel planner PDFs and imports layout link geometry.
#[derive(Parser, Debug)]
#[command(name = "lootpixel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a planner from a JSON configuration.
    Build {
        /// PlannerConfig as JSON.
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = "static/assets")]
        assets: PathBuf,
        /// Link store written by the import commands.
        #[arg(long)]
        links: Option<PathBuf>,
        #[arg(long)]
        temp_dir: Option<PathBuf>,
    },
    /// Record the anchors of a layout SVG.
    ImportSvg {
        #[arg(long)]
        product: u32,
        #[arg(long)]
        layout_type: String,
        #[arg(long)]
        option: String,
        #[arg(long)]
        svg: PathBuf,
        #[arg(long)]
        links: PathBuf,
    },
    /// Record the links of an admin PDF template.
    ImportPdfLinks {
        #[arg(long)]
        layout_type: String,
        #[arg(long)]
        layout_name: String,
        #[arg(long)]
        pdf: PathBuf,
        #[arg(long)]
        links: PathBuf,
    },
    /// Print the product id encoded in an access code.
    CodeProduct { code: String },
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Build {
            config,
            output,
            assets,
            links,
            temp_dir,
        } => {
            let config: PlannerConfig = serde_json::from_str(&fs::read_to_string(&config)?)?;
            let mut builder = PlannerBuilder::new().with_asset_root(assets);
            if let Some(links) = links {
                builder = builder.with_link_geometry(Arc::new(JsonLinkStore::open(links)?));
            }
            if let Some(dir) = temp_dir {
                builder = builder.with_temp_dir(dir);
            }
            let report = builder.build()?.build(&config, &output)?;

            println!("Wrote {} ({} pages)", report.output.display(), report.page_count());
            for page in &report.pages {
                println!("  {:>2}  {}", page.index + 1, page.name);
            }
            println!(
                "{} links injected, {} skipped",
                report.links.len(),
                report.skipped_links.len()
            );
            if !report.unresolved_destinations.is_empty() {
                println!(
                    "Linked to the cover instead of: {}",
                    report.unresolved_destinations.join(", ")
                );
            }
        }
        Command::ImportSvg {
            product,
            layout_type,
            option,
            svg,
            links,
        } => {
            let mut store = JsonLinkStore::open(&links)?;
            let count = import_svg_anchors(&mut store, product, &layout_type, &option, &svg)?;
            store.save()?;
            println!("Recorded {} anchors in {}", count, links.display());
        }
        Command::ImportPdfLinks {
            layout_type,
            layout_name,
            pdf,
            links,
        } => {
            let mut store = JsonLinkStore::open(&links)?;
            let count = import_template_links(&mut store, &layout_type, &layout_name, &pdf)?;
            store.save()?;
            println!("Recorded {} template links in {}", count, links.display());
        }
        Command::CodeProduct { code } => match product_id_from_code(&code) {
            Some(id) => println!("{}", id),
            None => {
                return Err(PipelineError::InvalidConfig(format!(
                    "'{}' is not a valid access code",
                    code
                )));
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
