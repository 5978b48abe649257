use core::fmt;

use serde::{Deserialize, Serialize};

/// Вид игры. Набор фиксированный, переключение — явным `match`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameKind {
    #[default]
    Dice,
    Card,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Dice, GameKind::Card];

    pub const fn slug(self) -> &'static str {
        match self {
            GameKind::Dice => "dice",
            GameKind::Card => "card",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "dice" => Some(GameKind::Dice),
            "card" | "cards" => Some(GameKind::Card),
            _ => None,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Карточка игры в сетке выбора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameInfo {
    pub kind: GameKind,
    pub title: String,
    pub description: String,
}

/// Каталог доступных игр (то, что показывает сетка игр).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameCatalog {
    pub games: Vec<GameInfo>,
}

impl GameCatalog {
    pub fn get(&self, kind: GameKind) -> Option<&GameInfo> {
        self.games.iter().find(|g| g.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self {
            games: vec![
                GameInfo {
                    kind: GameKind::Dice,
                    title: "Dice".to_string(),
                    description: "Roll a 4, 5 or 6 to win up to 5x your bet.".to_string(),
                },
                GameInfo {
                    kind: GameKind::Card,
                    title: "Five Cards".to_string(),
                    description: "Pairs and better pay, four of a kind pays 100x.".to_string(),
                },
            ],
        }
    }
}
