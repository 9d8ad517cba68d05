use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Social network an account lives on. Stored as its upper-case name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    #[sea_orm(string_value = "INSTAGRAM")]
    Instagram,
    #[sea_orm(string_value = "TIKTOK")]
    Tiktok,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "INSTAGRAM",
            Platform::Tiktok => "TIKTOK",
        }
    }

    /// Case-insensitive lookup, e.g. `"instagram"` or `"TikTok"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INSTAGRAM" => Some(Platform::Instagram),
            "TIKTOK" => Some(Platform::Tiktok),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Platform::parse("instagram"), Some(Platform::Instagram));
        assert_eq!(Platform::parse("TikTok"), Some(Platform::Tiktok));
        assert_eq!(Platform::parse("myspace"), None);
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Platform::Tiktok).unwrap(), "\"TIKTOK\"");
    }
}
