/// Architecture constants for build matrix generation
pub mod arch {
    /// Architectures accepted by the validator and matrix builder
    pub const SUPPORTED: &[&str] = &["amd64", "arm64", "arm", "386", "ppc64le", "s390x"];

    /// Architectures assigned to the ARM runner family
    pub const ARM_FAMILY: &[&str] = &["arm64", "arm"];

    /// Default architecture list when the caller supplies none
    pub const DEFAULT: &str = "amd64 arm64";
}

/// Ubuntu runner version constants
pub mod ubuntu {
    /// Supported Ubuntu LTS versions; anything else is rejected
    pub const LTS_VERSIONS: &[&str] = &["20.04", "22.04", "24.04"];

    /// Default Ubuntu version when the caller supplies none
    pub const DEFAULT: &str = "24.04";
}

/// Container registry constants
pub mod registry {
    /// Registries accepted without a warning. Other syntactically valid
    /// hostnames are accepted but flagged.
    pub const KNOWN_SAFE: &[&str] = &[
        "ghcr.io",
        "docker.io",
        "quay.io",
        "gcr.io",
        "public.ecr.aws",
    ];
}
