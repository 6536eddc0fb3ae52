#[cfg(test)]
mod tests;

/// Pick the canonical image name for a publish run.
///
/// Precedence: an explicitly supplied name wins; otherwise the name the
/// caller extracted from the Nix package metadata is used with any leading
/// `{registry}/` prefix stripped; otherwise the repository identifier (e.g.
/// the GitHub `owner/repo` slug) is the fallback.
///
/// Extracting the metadata name from the flake is the caller's job; this
/// function never shells out.
pub fn resolve_image_name(
    image_name: &str,
    nix_image_name: &str,
    registry: &str,
    repository: &str,
) -> String {
    let image_name = image_name.trim();
    if !image_name.is_empty() {
        return image_name.to_string();
    }

    let nix_image_name = nix_image_name.trim();
    if !nix_image_name.is_empty() {
        let registry = registry.trim();
        if !registry.is_empty() {
            if let Some(stripped) = nix_image_name.strip_prefix(&format!("{}/", registry)) {
                return stripped.to_string();
            }
        }
        return nix_image_name.to_string();
    }

    repository.trim().to_string()
}
