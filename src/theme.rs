use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub line_color: String,
    pub accent_color: String,
    pub background: String,
}

impl Theme {
    pub fn gold() -> Self {
        Self {
            line_color: "#D4AF37".to_string(),
            accent_color: "#0EA5E9".to_string(),
            background: "#FAFAF5".to_string(),
        }
    }

    pub fn slate() -> Self {
        Self {
            line_color: "#7A8AA6".to_string(),
            accent_color: "#1C2430".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gold" | "default" => Some(Self::gold()),
            "slate" | "modern" => Some(Self::slate()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gold()
    }
}
