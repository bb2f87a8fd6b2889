// Selector accepted by the owner endpoint when no account identifier is configured.
pub const OWNER_SELF: &str = "me";

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub platform: String,

    pub token: String,

    pub owner: Option<String>,
}

impl PlatformConfig {
    pub fn owner_selector(&self) -> &str {
        self.owner.as_deref().unwrap_or(OWNER_SELF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_owner_self_selector() {
        let config = PlatformConfig {
            platform: "foobot".to_string(),
            token: "adfdsfasd".to_string(),
            owner: None,
        };

        assert_eq!(config.owner_selector(), "me");
    }

    #[test]
    fn prefers_the_configured_owner() {
        let config = PlatformConfig {
            platform: "foobot".to_string(),
            token: "adfdsfasd".to_string(),
            owner: Some("example@example.com".to_string()),
        };

        assert_eq!(config.owner_selector(), "example@example.com");
    }
}
