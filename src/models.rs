use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storefront a game was imported from. Part of every game's details route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameShop {
    #[default]
    Steam,
    Epic,
    Custom,
}

impl std::fmt::Display for GameShop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameShop::Steam => write!(f, "steam"),
            GameShop::Epic => write!(f, "epic"),
            GameShop::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGame {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub shop: GameShop,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub play_time_in_seconds: u64,
    #[serde(default)]
    pub last_time_played: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub recent_games: Vec<UserGame>,
    #[serde(default)]
    pub library_games: Vec<UserGame>,
}

/// The identity fields of a game needed to route to its details page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRef {
    pub shop: GameShop,
    pub object_id: String,
    pub title: String,
}

impl From<&UserGame> for GameRef {
    fn from(game: &UserGame) -> Self {
        Self {
            shop: game.shop,
            object_id: game.object_id.clone(),
            title: game.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

/// Two-stop gradient painted behind the profile header. Supplied by the
/// session store for the signed-in viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileBackground {
    pub from: Rgb,
    pub to: Rgb,
}

impl ProfileBackground {
    /// Parses `#rrggbb,#rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        let (from, to) = s.split_once(',')?;
        Some(Self {
            from: Rgb::from_hex(from)?,
            to: Rgb::from_hex(to)?,
        })
    }
}

/// The currently authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentViewer {
    pub id: String,
    #[serde(default)]
    pub profile_background: Option<ProfileBackground>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: String,
}
