use anyhow::Result;
use cigate::{
    cli::{Cli, Commands},
    matrix::build_matrix,
    resolve::resolve_image_name,
    validate::{validate_inputs, ValidationInput},
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr; stdout is reserved for structured output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate {
            nix_flake_attr,
            registry,
            image_name,
            architectures,
            ubuntu_version,
        } => {
            let input = ValidationInput {
                nix_flake_attr,
                registry,
                image_name,
                architectures,
                ubuntu_version,
            };
            let report = validate_inputs(&input)?;
            for warning in &report.warnings {
                warn!("{}", warning);
            }
            info!("All inputs validated successfully");
        }
        Commands::PrepareMatrix {
            architectures,
            ubuntu_version,
        } => {
            let output = build_matrix(&architectures, &ubuntu_version);
            println!("{}", serde_json::to_string(&output)?);
        }
        Commands::ResolveImageName {
            image_name,
            nix_image_name,
            registry,
            repository,
        } => {
            println!(
                "{}",
                resolve_image_name(&image_name, &nix_image_name, &registry, &repository)
            );
        }
        Commands::Version => {
            println!("cigate {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
