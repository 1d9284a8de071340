use std::io::stdout;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use rebalance_lib::report::{disable_ansi_colors, emit_reports, set_minimum_severity, Severity};
use rebalance_lib::{
    append_spawn_mods, generate_config_template, generate_flat_mod, generate_tiered_mod,
    list_ritpows, parse_data_file, BaseMod, ModConfig, ParsedData, Resolver,
};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Directory with the game data files and base mods.
    #[clap(long, global = true, default_value = "data")]
    data_dir: PathBuf,
    /// Directory where generated mods are written.
    #[clap(long, global = true, default_value = "output")]
    output_dir: PathBuf,
    /// Name of the ritual data file inside the data directory.
    #[clap(long, global = true, default_value = "Ritual Data v5.33.c5m")]
    ritual_data: String,
    /// Name of the monster data file inside the data directory.
    #[clap(long, global = true, default_value = "Monster Data v5.33.c5m")]
    monster_data: String,
    /// Output the reports in JSON format
    #[clap(long, global = true)]
    json: bool,
    /// Omit color from the output.
    #[clap(long, global = true)]
    no_color: bool,
    /// Show tips about the data files in addition to warnings and errors
    #[clap(long, global = true)]
    show_tips: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scale all ritual costs by one percentage.
    Flat {
        /// Percentage of the original costs, for example 50 or 62.5
        #[clap(value_parser = parse_percentage, allow_negative_numbers = true)]
        percentage: f64,
        /// File name of the mod, in the output directory
        output: Option<String>,
    },
    /// Scale ritual costs and spawn rates according to a JSON configuration.
    Tiered {
        /// Path to the configuration file.
        config: PathBuf,
        /// File name of the mod, in the output directory
        output: Option<String>,
    },
    /// List the ritual power types found in the ritual data.
    ListRitpows,
    /// Write a configuration template that lists every ritual power type.
    GenerateConfig {
        /// Path of the template to write.
        #[clap(default_value = "balance_config.json")]
        output: PathBuf,
    },
}

fn parse_percentage(s: &str) -> Result<f64, String> {
    let percentage = s
        .parse::<f64>()
        .ok()
        .filter(|pct| pct.is_finite())
        .ok_or_else(|| format!("'{s}' is not a valid percentage"))?;
    if percentage <= 0.0 {
        return Err("Percentage must be greater than 0".to_owned());
    }
    Ok(percentage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(windows)]
    if !cli.no_color {
        let _ = ansiterm::enable_ansi_support()
            .map_err(|_| eprintln!("Failed to enable ANSI support. Continuing without colored output."));
    }
    if cli.no_color {
        disable_ansi_colors();
    }
    if cli.show_tips {
        set_minimum_severity(Severity::Tips);
    }

    let result = run(&cli);
    emit_reports(cli.json);
    result
}

fn run(cli: &Cli) -> Result<()> {
    let ritual_path = cli.data_dir.join(&cli.ritual_data);
    match &cli.command {
        Commands::Flat { percentage, output } => {
            flat(cli, &ritual_path, *percentage, output.as_deref())
        }
        Commands::Tiered { config, output } => tiered(cli, &ritual_path, config, output.as_deref()),
        Commands::ListRitpows => {
            let data = parse_data_file(&ritual_path)?;
            list_ritpows(&mut stdout().lock(), &data.ritpows)?;
            Ok(())
        }
        Commands::GenerateConfig { output } => {
            let data = parse_data_file(&ritual_path)?;
            let reference = generate_config_template(&data.ritpows, output)?;
            println!("Generated config template: {}", output.display());
            println!("Generated reference file: {}", reference.display());
            Ok(())
        }
    }
}

fn flat(cli: &Cli, ritual_path: &Path, percentage: f64, output: Option<&str>) -> Result<()> {
    let output_file = output.map_or_else(
        || format!("ritual_costs_{}pct.c5m", percentage.trunc()),
        str::to_owned,
    );

    println!("Parsing ritual data from: {}", ritual_path.display());
    let data = parse_data_file(ritual_path)?;
    println!("Found {} rituals with costs", data.rituals().count());

    let output_path = cli.output_dir.join(&output_file);
    println!("Generating mod file: {}", output_path.display());
    let total = generate_flat_mod(&data, percentage, &output_path)?;

    println!(
        "Successfully generated mod with {total} ritual cost modifications at {percentage}% of original"
    );
    print_usage(&output_file);
    Ok(())
}

fn tiered(cli: &Cli, ritual_path: &Path, config: &Path, output: Option<&str>) -> Result<()> {
    let output_file = output.unwrap_or("tiered_ritual_costs.c5m");
    let output_path = cli.output_dir.join(output_file);

    let data = parse_data_file(ritual_path)?;
    let config = ModConfig::read(config)?;

    println!("Parsing ritual data from: {}", ritual_path.display());
    println!("Found {} rituals with costs", data.rituals().count());
    println!("Found {} ritual power types", data.ritpows.len());

    // Monster data only matters when spawn rates change.
    let monsters = if config.spawn_modifier == 100 {
        ParsedData::default()
    } else {
        let monsters = parse_data_file(&cli.data_dir.join(&cli.monster_data))?;
        println!("Found {} monsters with spawn traits", monsters.monsters().count());
        monsters
    };

    config.validate(&data.ritpows);

    let base = match &config.base_mod {
        Some(name) => {
            let base = BaseMod::load(&cli.data_dir, name)?;
            if base.is_some() {
                println!("Using base mod: {name}");
            } else {
                let path = cli.data_dir.join(name);
                println!("Warning: Base mod '{name}' not found at {}", path.display());
            }
            base
        }
        None => None,
    };

    let resolver = Resolver::new(&config, &data.ritpows);
    println!("\nGenerating mod file: {}", output_path.display());
    let stats = generate_tiered_mod(&data, &resolver, base.as_ref(), &output_path)?;

    println!("\nRitual Cost Results:");
    println!("  Modified: {} rituals", stats.modified);
    println!("  Skipped (100%): {} rituals", stats.skipped);

    if let Some(count) = append_spawn_mods(&monsters, &resolver, &output_path)? {
        println!("\nSpawn Rate Results:");
        println!("  Modified: {count} monsters");
        println!("  Spawn modifier: {}%", config.spawn_modifier);
    }

    print_usage(output_file);
    Ok(())
}

fn print_usage(output_file: &str) {
    println!("\nTo use this mod:");
    println!("  1. Copy '{output_file}' to your CoE5 mods folder");
    println!("  2. Enable the mod in the game's mod menu");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("50"), Ok(50.0));
        assert_eq!(parse_percentage("62.5"), Ok(62.5));
        assert_eq!(parse_percentage("abc"), Err("'abc' is not a valid percentage".to_owned()));
        assert_eq!(parse_percentage("inf"), Err("'inf' is not a valid percentage".to_owned()));
        assert_eq!(parse_percentage("0"), Err("Percentage must be greater than 0".to_owned()));
        assert_eq!(parse_percentage("-5"), Err("Percentage must be greater than 0".to_owned()));
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
