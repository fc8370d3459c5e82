use clap::{Parser, Subcommand};
use flag_finder::{config, data, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flag-finder")]
#[command(about = "Static site generator for country flag reference sites")]
#[command(long_about = "\
Static site generator for country flag reference sites

A JSON dataset of countries goes in; a self-contained static site comes
out: one detail page per country plus a searchable index page.

Dataset format (countries.json):

  [
    {
      \"name\": \"Japan\",
      \"capital\": \"Tokyo\",
      \"currency\": { \"name\": \"Japanese yen\", \"symbol\": \"¥\" },
      \"flag\": \"https://flagcdn.com/w320/jp.png\",
      \"description\": \"Japan's flag is white with a red circle. ...\"
    }
  ]

All fields are required and country names must produce unique URL slugs;
'flag-finder check' validates a dataset without writing anything.

Run 'flag-finder gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Country dataset (JSON)
    #[arg(long, default_value = "countries.json", global = true)]
    data: PathBuf,

    /// Site configuration file; stock defaults are used when absent
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site from the dataset
    Build,
    /// Validate the dataset and config without building
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::SiteConfig::load_or_default(&cli.config)?;
            let countries = data::load(&cli.data)?;

            println!("==> Building from {}", cli.data.display());
            generate::generate(&countries, &site_config, &cli.output)?;
            output::print_build_output(&countries, &site_config);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let _ = config::SiteConfig::load_or_default(&cli.config)?;
            println!("==> Checking {}", cli.data.display());
            let countries = data::load(&cli.data)?;
            output::print_check_output(&countries);
            println!("==> Dataset is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
