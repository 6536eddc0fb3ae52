use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cigate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate untrusted workflow inputs before they reach the shell
    Validate {
        /// Nix flake attribute to build (e.g. .#containerImage)
        #[arg(value_name = "NIX_FLAKE_ATTR", default_value = "")]
        nix_flake_attr: String,

        /// Container registry hostname (e.g. ghcr.io)
        #[arg(value_name = "REGISTRY", default_value = "")]
        registry: String,

        /// Image name without registry prefix (e.g. myorg/myapp)
        #[arg(value_name = "IMAGE_NAME", default_value = "")]
        image_name: String,

        /// Architectures to build, comma or space separated
        #[arg(value_name = "ARCHITECTURES", default_value = "")]
        architectures: String,

        /// Ubuntu LTS version for the runners (e.g. 24.04)
        #[arg(value_name = "UBUNTU_VERSION", default_value = "")]
        ubuntu_version: String,
    },

    /// Emit the build matrix JSON for an architecture list
    PrepareMatrix {
        /// Architectures to build, comma or space separated
        #[arg(value_name = "ARCHITECTURES", default_value = "")]
        architectures: String,

        /// Ubuntu LTS version for the runners (e.g. 24.04)
        #[arg(value_name = "UBUNTU_VERSION", default_value = "")]
        ubuntu_version: String,
    },

    /// Print the canonical image name for a publish run
    ResolveImageName {
        /// Explicit image name, wins when non-empty
        #[arg(value_name = "IMAGE_NAME", default_value = "")]
        image_name: String,

        /// Image name extracted from the Nix package metadata, if any
        #[arg(value_name = "NIX_IMAGE_NAME", default_value = "")]
        nix_image_name: String,

        /// Registry whose prefix should be stripped from the Nix name
        #[arg(value_name = "REGISTRY", default_value = "")]
        registry: String,

        /// Fallback repository identifier (e.g. the GitHub owner/repo slug)
        #[arg(value_name = "REPOSITORY", default_value = "")]
        repository: String,
    },

    /// Show version information
    Version,
}
