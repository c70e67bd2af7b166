use clap::{Parser, Subcommand};
use simple_landing::{config, generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("LANDING_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("LANDING_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-landing")]
#[command(about = "Single-page landing site builder")]
#[command(long_about = "\
Single-page landing site builder

A folder of plain text files becomes one self-contained index.html. Every
file is optional; missing files simply leave their region out.

Content structure:

  content/
  ├── Titulo.txt                   # Eyebrow, title, subtitle (one per line)
  ├── Cuerpo.txt                   # Body paragraphs
  ├── Despegables/                 # Accordion sections
  │   └── Des1-Metodología.txt     # Items, optionally \"text <url>\"
  ├── Botones/                     # Indicator groups
  │   └── Indicadores/
  │       ├── 1.Fallecidos.txt     # Card: first line title, rest text
  │       └── Pie.txt              # Footer; <Label> links to a section
  ├── BENEFICIARIOS.txt            # Lead, paragraphs, last line button
  ├── REGISTRO DE USUARIOS.txt     # Title from file name; buttons
  ├── Contacto.txt                 # Contact lines
  ├── Redes.txt                    # \"icon.png <url>\" per line
  └── site.toml                    # Presentation settings (optional)

Inline markup: **bold**, *bold*, <link:\"label\"=https://...>

Run 'simple-landing gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output HTML file; asset paths are relative to its directory
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the content folder and print the inventory
    Scan {
        /// Print the loaded records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan and render the page
    Build,
    /// Validate the content folder without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(if cli.verbose { "debug" } else { "info" }))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Scan { json } => {
            let site = scan::load_site(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&site)?);
            } else {
                output::print_scan_output(&site.content, &cli.source);
            }
        }
        Command::Build => {
            println!("==> Scanning {}", cli.source.display());
            let site = scan::load_site(&cli.source)?;
            output::print_scan_output(&site.content, &cli.source);

            println!("==> Generating {}", cli.output.display());
            let generated = generate::generate(&site, &cli.output)?;
            output::print_generate_output(&site.content, &generated);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = scan::load_site(&cli.source)?;
            let (hero_src, hero_found) = generate::choose_hero_image(
                generate::site_root(&cli.output),
                &site.config.images,
            );
            output::print_check_output(&site.content, &hero_src, hero_found);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
