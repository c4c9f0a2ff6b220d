use serde::Serialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Titles the service is willing to analyze.
pub const KNOWN_GAMES: [&str; 7] = [
    "Baldur's Gate",
    "Mortal Kombat",
    "Call of Duty",
    "Mario Kart",
    "Hogwarts Legacy",
    "Grand Theft Auto",
    "Cities: Skylines",
];

/// A game title taken from the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameName(String);

impl GameName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment check against an article headline.
    pub fn matches_title(&self, title: &str) -> bool {
        normalize_title(title).contains(&normalize_title(&self.0))
    }
}

impl fmt::Display for GameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folds a headline or game name into a form suitable for substring matching.
pub fn normalize_title(title: &str) -> String {
    title
        .nfkc()
        .collect::<String>()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .to_lowercase()
}

#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<String>,
}

impl GameCatalog {
    pub fn new<I, S>(games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            games: games.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<GameName> {
        self.games
            .iter()
            .find(|game| game.as_str() == name)
            .map(|game| GameName(game.clone()))
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::new(KNOWN_GAMES)
    }
}
