//! Identifier case conversion

use regex::Regex;
use std::sync::LazyLock;

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
static DOUBLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([A-Z])").expect("valid regex"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Convert a PascalCase or camelCase schema identifier to snake_case
///
/// Acronym runs stay together unless a capitalized word follows them:
/// `VPCId` becomes `vpc_id`.
pub fn to_snake_case(name: &str) -> String {
    let name = CAPITALIZED_WORD.replace_all(name, "${1}_${2}");
    let name = DOUBLE_SEPARATOR.replace_all(&name, "_${1}");
    let name = LOWER_UPPER.replace_all(&name, "${1}_${2}");
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("DeleteOnTermination"), "delete_on_termination");
        assert_eq!(to_snake_case("VPCId"), "vpc_id");
        assert_eq!(to_snake_case("IAMInstanceProfile"), "iam_instance_profile");
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn test_to_snake_case_misc() {
        assert_eq!(to_snake_case("Tags"), "tags");
        assert_eq!(to_snake_case("tags"), "tags");
        assert_eq!(to_snake_case("instanceId"), "instance_id");
        assert_eq!(to_snake_case("Ipv6Address"), "ipv6_address");
        assert_eq!(to_snake_case("AccessKeyMetadata"), "access_key_metadata");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }
}
