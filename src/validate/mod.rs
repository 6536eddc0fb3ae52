use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::constants::{arch, registry, ubuntu};


lazy_static! {
    // Allowlist grammars. Each field is matched against the characters it is
    // permitted to contain; anything outside the class is rejected rather
    // than scanning for known-bad shell metacharacters.
    static ref FLAKE_ATTR_REGEX: Regex = Regex::new(r"^[A-Za-z0-9._#/-]+$")
        .expect("FLAKE_ATTR_REGEX should be a valid regex pattern");
    static ref HOSTNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9.-]+$")
        .expect("HOSTNAME_REGEX should be a valid regex pattern");
    static ref IMAGE_NAME_REGEX: Regex = Regex::new(r"^[a-z0-9._-]+(/[a-z0-9._-]+)*$")
        .expect("IMAGE_NAME_REGEX should be a valid regex pattern");
}

/// The five raw workflow inputs, exactly as supplied by the caller.
/// Empty (or whitespace-only) fields mean the workflow will use its own
/// default downstream and are always accepted.
#[derive(Debug, Clone, Default)]
pub struct ValidationInput {
    pub nix_flake_attr: String,
    pub registry: String,
    pub image_name: String,
    pub architectures: String,
    pub ubuntu_version: String,
}

/// Produced when every field passed. Carries non-fatal warnings the caller
/// should surface (e.g. an unrecognized but well-formed registry).
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

/// One variant per rejection rule, so callers and tests can assert on the
/// failure class rather than just the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("nix-flake-attr '{0}' must start with '.#' or '/'")]
    FlakeAttrPrefix(String),

    #[error("nix-flake-attr '{0}' contains invalid characters (shell metacharacters are not allowed)")]
    FlakeAttrCharacters(String),

    #[error("registry '{0}' contains invalid characters")]
    RegistryCharacters(String),

    #[error("image-name '{0}' contains a path traversal sequence")]
    PathTraversal(String),

    #[error("invalid image name format: '{0}'")]
    ImageNameFormat(String),

    #[error("Unknown architecture: {0}")]
    UnknownArchitecture(String),

    #[error("Unknown ubuntu-version: {0}")]
    UnknownUbuntuVersion(String),
}

/// Validate all five workflow inputs, failing closed on the first rule
/// violation. Pure and idempotent; emitting the result is the only effect.
pub fn validate_inputs(input: &ValidationInput) -> Result<ValidationReport, ValidationError> {
    let mut report = ValidationReport::default();

    validate_nix_flake_attr(&input.nix_flake_attr)?;
    if let Some(warning) = validate_registry(&input.registry)? {
        report.warnings.push(warning);
    }
    validate_image_name(&input.image_name)?;
    validate_architectures(&input.architectures)?;
    validate_ubuntu_version(&input.ubuntu_version)?;

    Ok(report)
}

/// A flake attribute must be an installable path: either a flake output
/// reference (`.#...`) or an absolute store path (`/...`).
pub fn validate_nix_flake_attr(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    if !value.starts_with(".#") && !value.starts_with('/') {
        return Err(ValidationError::FlakeAttrPrefix(value.to_string()));
    }

    if !FLAKE_ATTR_REGEX.is_match(value) {
        return Err(ValidationError::FlakeAttrCharacters(value.to_string()));
    }

    Ok(())
}

/// Registries outside the known-safe set are allowed as long as they look
/// like a hostname, but the caller gets a warning to surface.
pub fn validate_registry(value: &str) -> Result<Option<String>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if !HOSTNAME_REGEX.is_match(value) {
        return Err(ValidationError::RegistryCharacters(value.to_string()));
    }

    if !registry::KNOWN_SAFE.contains(&value) {
        return Ok(Some(format!(
            "registry '{}' is not in the known safe list ({})",
            value,
            registry::KNOWN_SAFE.join(", ")
        )));
    }

    Ok(None)
}

/// Image names are lowercase slash-delimited repository paths. Traversal is
/// detected per path segment, so `foo/../../../bar` is caught while a token
/// like `a..b` stays valid.
pub fn validate_image_name(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    if value.split('/').any(|segment| segment == "..") {
        return Err(ValidationError::PathTraversal(value.to_string()));
    }

    if !IMAGE_NAME_REGEX.is_match(value) {
        return Err(ValidationError::ImageNameFormat(value.to_string()));
    }

    Ok(())
}

/// Architecture lists accept comma and/or whitespace separators; every token
/// must be in the supported set.
pub fn validate_architectures(value: &str) -> Result<(), ValidationError> {
    for token in value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        if !arch::SUPPORTED.contains(&token.to_lowercase().as_str()) {
            return Err(ValidationError::UnknownArchitecture(token.to_string()));
        }
    }

    Ok(())
}

/// Only supported LTS versions are accepted; well-formed but unsupported
/// versions (interim releases, EOL releases) are rejected the same way as
/// garbage.
pub fn validate_ubuntu_version(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    if !ubuntu::LTS_VERSIONS.contains(&value) {
        return Err(ValidationError::UnknownUbuntuVersion(value.to_string()));
    }

    Ok(())
}
