use std::collections::VecDeque;
use std::sync::Mutex;

use url::form_urlencoded;

use crate::models::GameRef;

pub const ROOT_PATH: &str = "/";

/// Paths kept by [`HistoryNavigator`]; older ones are dropped.
pub const HISTORY_LIMIT: usize = 64;

/// Route of the details page for `game`, e.g. `/game/steam/570?title=Dota+2`.
pub fn build_game_details_path(game: &GameRef) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("title", &game.title)
        .finish();
    format!("/game/{}/{}?{}", game.shop, game.object_id, query)
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that records recently visited paths, newest last.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<VecDeque<String>>,
}

impl HistoryNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Mutex::new(VecDeque::from([initial.to_string()])),
        }
    }

    pub fn current(&self) -> String {
        self.entries
            .lock()
            .map(|entries| entries.back().cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate -> {}", path);
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        if entries.len() == HISTORY_LIMIT {
            entries.pop_front();
        }
        entries.push_back(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameShop;

    #[test]
    fn details_path_encodes_title() {
        let game = GameRef {
            shop: GameShop::Steam,
            object_id: "1245620".into(),
            title: "ELDEN RING & Co".into(),
        };
        assert_eq!(
            build_game_details_path(&game),
            "/game/steam/1245620?title=ELDEN+RING+%26+Co"
        );
    }

    #[test]
    fn history_records_in_order() {
        let nav = HistoryNavigator::default();
        nav.navigate("/game/epic/x?title=X");
        nav.navigate(ROOT_PATH);
        assert_eq!(nav.history(), vec!["/", "/game/epic/x?title=X", "/"]);
        assert_eq!(nav.current(), "/");
    }

    #[test]
    fn history_keeps_only_recent_paths() {
        let nav = HistoryNavigator::default();
        for i in 0..HISTORY_LIMIT + 10 {
            nav.navigate(&format!("/game/steam/{i}?title=G"));
        }
        let history = nav.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], "/game/steam/10?title=G");
        assert_eq!(nav.current(), format!("/game/steam/{}?title=G", HISTORY_LIMIT + 9));
    }
}
