#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_explicit_name_wins() {
        let name = resolve_image_name(
            "custom/image-name",
            "ghcr.io/buurro/publish-container-image",
            "ghcr.io",
            "buurro/fallback",
        );
        assert_eq!(name, "custom/image-name");
    }

    #[test]
    fn test_strips_registry_prefix_from_nix_name() {
        let name = resolve_image_name(
            "",
            "ghcr.io/buurro/publish-container-image",
            "ghcr.io",
            "buurro/fallback",
        );
        assert_eq!(name, "buurro/publish-container-image");
    }

    #[test]
    fn test_nix_name_without_registry_prefix_used_as_is() {
        let name = resolve_image_name("", "myorg/myapp", "ghcr.io", "buurro/fallback");
        assert_eq!(name, "myorg/myapp");
    }

    #[test]
    fn test_other_registry_prefix_is_not_stripped() {
        let name = resolve_image_name("", "quay.io/myorg/myapp", "ghcr.io", "buurro/fallback");
        assert_eq!(name, "quay.io/myorg/myapp");
    }

    #[test]
    fn test_falls_back_to_repository() {
        let name = resolve_image_name("", "", "ghcr.io", "buurro/publish-container-image");
        assert_eq!(name, "buurro/publish-container-image");
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let name = resolve_image_name("   ", "  ", "ghcr.io", "buurro/fallback");
        assert_eq!(name, "buurro/fallback");
    }
}
