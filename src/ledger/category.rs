use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of spending categories. The serde form is the uppercase token
/// (`"FOOD"`), shared by the snapshot file and the bulk-import format; the
/// display label is the human-readable spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Clothes,
    Fun,
    Transport,
    Hobby,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Clothes,
        Category::Fun,
        Category::Transport,
        Category::Hobby,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothes => "Clothes",
            Category::Fun => "Fun",
            Category::Transport => "Transport",
            Category::Hobby => "Hobby",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Clothes => "CLOTHES",
            Category::Fun => "FUN",
            Category::Transport => "TRANSPORT",
            Category::Hobby => "HOBBY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-sensitive parse of the uppercase token. Unknown tokens are a hard
/// error; there is no catch-all category.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.token() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tokens_match_import_tokens() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.token()));
            let parsed: Category = category.token().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!("BOGUS".parse::<Category>().is_err());
        // Labels are display-only, not accepted as tokens.
        assert!("Food".parse::<Category>().is_err());
    }
}
