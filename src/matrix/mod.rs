use serde::{Deserialize, Serialize};

use crate::constants::{arch, ubuntu};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatrixEntry {
    pub arch: String,
    pub runner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildMatrix {
    pub include: Vec<MatrixEntry>,
}

/// The build-planning artifact consumed by downstream workflow steps: the
/// matrix form for job fan-out and the flat architecture list, so neither
/// side has to re-derive one from the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatrixOutput {
    pub matrix: BuildMatrix,
    pub architectures: Vec<String>,
}

/// Normalize a raw architecture list into distinct tokens. Comma and
/// whitespace separators (or any mix) produce the same token list; empty
/// tokens from doubled separators are dropped, first-seen order is kept and
/// duplicates collapse.
pub fn parse_architectures(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for token in raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let token = token.to_lowercase();
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

/// Runner selection is a pure function of architecture class and Ubuntu
/// version: ARM-family architectures get the `-arm` runner variant.
pub fn runner_for(architecture: &str, ubuntu_version: &str) -> String {
    if arch::ARM_FAMILY.contains(&architecture) {
        format!("ubuntu-{}-arm", ubuntu_version)
    } else {
        format!("ubuntu-{}", ubuntu_version)
    }
}

/// Build the matrix for a raw architecture list. Inputs are expected to have
/// already passed validation; unknown tokens are not re-rejected here (see
/// DESIGN.md). Empty inputs fall back to the workflow defaults.
pub fn build_matrix(architectures: &str, ubuntu_version: &str) -> MatrixOutput {
    let architectures = if architectures.trim().is_empty() {
        arch::DEFAULT
    } else {
        architectures
    };
    let ubuntu_version = if ubuntu_version.trim().is_empty() {
        ubuntu::DEFAULT
    } else {
        ubuntu_version.trim()
    };

    let normalized = parse_architectures(architectures);
    let include = normalized
        .iter()
        .map(|architecture| MatrixEntry {
            arch: architecture.clone(),
            runner: runner_for(architecture, ubuntu_version),
        })
        .collect();

    MatrixOutput {
        matrix: BuildMatrix { include },
        architectures: normalized,
    }
}
