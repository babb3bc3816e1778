use anyhow::{Context, Result};
use mdpress_config::SiteConfig;
use mdpress_engine::{io, site};
use std::{env, path::PathBuf, process};

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [base-path] [--config <path>]");
    eprintln!();
    eprintln!("Builds the site described by mdpress.toml in the current directory");
    eprintln!("(or built-in defaults when no config file exists).");
    eprintln!();
    eprintln!("  base-path        Prefix for root-relative urls, e.g. /my-repo/");
    eprintln!("  --config <path>  Explicit config file location");
}

struct CliArgs {
    base_path: Option<String>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut parsed = CliArgs {
        base_path: None,
        config_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("Error: --config needs a path");
                    print_usage(&args[0]);
                    process::exit(1);
                };
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') && parsed.base_path.is_none() => {
                parsed.base_path = Some(arg.to_string());
            }
            arg => {
                eprintln!("Error: unrecognized argument '{arg}'");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn load_config(cli: &CliArgs) -> SiteConfig {
    let loaded = match &cli.config_path {
        Some(path) => match SiteConfig::load_from_path(path) {
            Ok(Some(config)) => Ok(config),
            Ok(None) => {
                eprintln!("Error: config file '{}' not found", path.display());
                process::exit(1);
            }
            Err(e) => Err(e),
        },
        None => SiteConfig::load_or_default("."),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Some(base_path) = &cli.base_path {
        config.base_path = base_path.clone();
    }
    config
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);
    let config = load_config(&cli);

    if let Err(e) = io::validate_dir(&config.content_dir) {
        eprintln!(
            "Error: content directory '{}' is invalid: {e}",
            config.content_dir.display()
        );
        process::exit(1);
    }

    // Static assets go first: the output directory is cleared in the process.
    if config.static_dir.is_dir() {
        io::copy_dir_recursive(&config.static_dir, &config.output_dir)
            .with_context(|| format!("copying static assets to {}", config.output_dir.display()))?;
        println!(
            "Copied static assets from {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        );
    }

    let template = std::fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;

    let report = site::generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.base_path,
    )?;

    for path in &report.written {
        println!("Generated {}", config.output_dir.join(path.as_str()).display());
    }
    for (path, err) in &report.failed {
        eprintln!("Failed to generate {path}: {err}");
    }

    if !report.is_clean() {
        process::exit(1);
    }

    Ok(())
}
