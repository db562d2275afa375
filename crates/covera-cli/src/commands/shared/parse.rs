use serde::de::DeserializeOwned;

/// Parse a kebab-case enum value using serde-deserialization.
///
/// Underscores are accepted in place of hyphens.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('_', "-");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use covera_core::enums::FrameworkStatus;

    use super::parse_enum;

    #[test]
    fn parses_kebab_case_enum() {
        let status: FrameworkStatus =
            parse_enum("no-guidance", "status").expect("status should parse");
        assert_eq!(status, FrameworkStatus::NoGuidance);
    }

    #[test]
    fn parses_underscore_alias() {
        let status: FrameworkStatus =
            parse_enum("no_guidance", "status").expect("status should parse");
        assert_eq!(status, FrameworkStatus::NoGuidance);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<FrameworkStatus>("retired", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'retired'"));
    }
}
