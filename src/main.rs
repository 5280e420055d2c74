use clap::{Parser, Subcommand};
use imageset::{config, convert, markup, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imageset")]
#[command(about = "Batch image converter for responsive web delivery")]
#[command(long_about = "\
Batch image converter for responsive web delivery

Walks a source tree, renders every JPEG and PNG into WebP and JPEG variants
at a ladder of widths, and mirrors the directory layout into the output tree:

  assets/images/                   # Source tree
  ├── hero.jpg
  └── gallery/
      └── one.png

  assets/images/processed/         # After `imageset convert`
  ├── hero-300.webp ... hero-1200.webp
  ├── hero-300.jpg  ... hero-1200.jpg
  └── gallery/
      ├── one-300.webp ...
      └── one-300.jpg  ...

Variant names follow {stem}-{width}.{ext}. The same template drives the
markup helpers, so srcset attributes printed by 'imageset markup' always
match the files 'imageset convert' writes.

Run 'imageset gen-config' to generate a documented imageset.toml.")]
#[command(version)]
struct Cli {
    /// Source tree to scan for images
    #[arg(long, default_value = "assets/images", global = true)]
    source: PathBuf,

    /// Output tree for converted variants
    #[arg(long, default_value = "assets/images/processed", global = true)]
    output: PathBuf,

    /// Pipeline configuration file
    #[arg(long, default_value = "imageset.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every image under the source tree into its width variants
    Convert,
    /// Scan and report what a conversion run would do, without encoding
    Check {
        /// Print the scan manifest as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Print variant markup for a deferred-source path
    Markup {
        /// Path used as the data-src attribute value
        path: String,
        /// Emit an eager <picture> instead of the lazy <img>
        #[arg(long)]
        eager: bool,
    },
    /// Print a stock imageset.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert => {
            let config = config::load_config(&cli.config)?;
            let report = convert::run(&cli.source, &cli.output, &config)?;
            output::print_convert_summary(&report);
        }
        Command::Check { json } => {
            let config = config::load_config(&cli.config)?;
            let skip = convert::nested_output(&cli.source, &cli.output);
            let manifest = scan::scan(&cli.source, skip.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_check_output(&manifest, &config.images);
            }
        }
        Command::Markup { path, eager } => {
            let config = config::load_config(&cli.config)?;
            let rendered = if eager {
                markup::render_eager_picture(&path, &config.images.widths)
            } else {
                markup::render_lazy_img(&path, &config.images.widths)
            };
            println!("{}", rendered.into_string());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
