//! Pure mapping from profile data and interaction state to what the page shows.
//!
//! Every branch the page can take is decided here, so the widget layer in
//! [`crate::ui`] only lays the tree out.

use chrono::{DateTime, Utc};

use crate::i18n::Translator;
use crate::models::{CurrentViewer, GameRef, ProfileBackground, UserGame, UserProfile};
use crate::playtime::format_play_time;
use crate::relative_time::RelativeTime;
use crate::ui::model::{is_me, EditModal, ViewState};

pub const LIBRARY_COLUMNS: usize = 3;

/// Collaborators needed to turn raw values into display strings.
pub struct Presenter<'a> {
    pub translator: &'a dyn Translator,
    pub relative_time: &'a dyn RelativeTime,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Artwork {
    Image { url: String, alt: String },
    /// No URL was provided.
    Placeholder,
}

impl Artwork {
    fn from_url(url: Option<&str>, alt: &str) -> Self {
        match url {
            Some(url) if !url.is_empty() => Artwork::Image {
                url: url.to_string(),
                alt: alt.to_string(),
            },
            _ => Artwork::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub avatar: Artwork,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerActions {
    pub edit_label: String,
    pub sign_out_label: String,
    pub signing_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub key: String,
    pub game: GameRef,
    pub cover: Artwork,
    pub title: String,
    pub last_played: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySection {
    pub heading: String,
    pub rows: Vec<ActivityRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryCell {
    pub key: String,
    pub game: GameRef,
    pub icon: Artwork,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibrarySection {
    pub heading: String,
    pub count: usize,
    pub total_play_time: String,
    pub columns: usize,
    pub cells: Vec<LibraryCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditModalView {
    pub title: String,
    pub field_label: String,
    pub display_name: String,
    pub save_label: String,
    pub cancel_label: String,
    pub can_save: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTree {
    pub background: Option<ProfileBackground>,
    pub header: Header,
    pub owner_actions: Option<OwnerActions>,
    pub activity: ActivitySection,
    pub library: LibrarySection,
    pub edit_modal: Option<EditModalView>,
}

pub fn build(
    profile: &UserProfile,
    viewer: Option<&CurrentViewer>,
    state: &ViewState,
    presenter: &Presenter<'_>,
) -> ProfileTree {
    let t = presenter.translator;
    let owner = is_me(viewer, profile);

    let owner_actions = owner.then(|| OwnerActions {
        edit_label: t.translate("edit_profile", &[]),
        sign_out_label: t.translate("sign_out", &[]),
        signing_out: state.signing_out(),
    });

    let edit_modal = match state.edit_modal() {
        EditModal::Open(form) if owner => Some(EditModalView {
            title: t.translate("edit_profile", &[]),
            field_label: t.translate("display_name", &[]),
            display_name: form.display_name.clone(),
            save_label: if form.saving {
                t.translate("saving", &[])
            } else {
                t.translate("save", &[])
            },
            cancel_label: t.translate("cancel", &[]),
            can_save: form.can_save(),
            error: form.error.clone(),
        }),
        _ => None,
    };

    ProfileTree {
        background: state.background(),
        header: Header {
            avatar: Artwork::from_url(profile.profile_image_url.as_deref(), &profile.display_name),
            display_name: profile.display_name.clone(),
        },
        owner_actions,
        activity: ActivitySection {
            heading: t.translate("activity", &[]),
            rows: profile
                .recent_games
                .iter()
                .map(|game| activity_row(game, presenter))
                .collect(),
        },
        library: library_section(profile, state, presenter),
        edit_modal,
    }
}

fn activity_row(game: &UserGame, presenter: &Presenter<'_>) -> ActivityRow {
    let last_played = game.last_time_played.map(|at| {
        let period = presenter.relative_time.relative_label(at, presenter.now, true);
        presenter.translator.translate("last_time_played", &[("period", &period)])
    });

    ActivityRow {
        key: game.object_id.clone(),
        game: GameRef::from(game),
        cover: Artwork::from_url(game.cover.as_deref(), &game.title),
        title: game.title.clone(),
        last_played,
    }
}

/// Recent games the page shows without a "last played" label.
pub fn undated_recent_games(profile: &UserProfile) -> Vec<&str> {
    profile
        .recent_games
        .iter()
        .filter(|game| game.last_time_played.is_none())
        .map(|game| game.object_id.as_str())
        .collect()
}

fn library_section(profile: &UserProfile, state: &ViewState, presenter: &Presenter<'_>) -> LibrarySection {
    let t = presenter.translator;
    let amount = format_play_time(&profile.library_games, t, state.number_formatter());

    LibrarySection {
        heading: t.translate("library", &[]),
        count: profile.library_games.len(),
        total_play_time: t.translate("total_play_time", &[("amount", &amount)]),
        columns: LIBRARY_COLUMNS,
        cells: profile
            .library_games
            .iter()
            .map(|game| LibraryCell {
                key: game.object_id.clone(),
                game: GameRef::from(game),
                icon: Artwork::from_url(game.icon_url.as_deref(), &game.title),
                label: game.title.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{GameShop, Rgb};
    use crate::relative_time::DistanceFormatter;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn game(id: &str, title: &str) -> UserGame {
        UserGame {
            object_id: id.into(),
            shop: GameShop::Steam,
            title: title.into(),
            cover: Some(format!("https://cdn/{id}/cover.jpg")),
            icon_url: None,
            play_time_in_seconds: 0,
            last_time_played: Some(now() - Duration::hours(3)),
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "subject".into(),
            display_name: "Subject".into(),
            profile_image_url: None,
            recent_games: vec![game("1", "Hades")],
            library_games: vec![],
        }
    }

    fn viewer(id: &str) -> CurrentViewer {
        CurrentViewer {
            id: id.into(),
            profile_background: None,
        }
    }

    fn render(profile: &UserProfile, viewer: Option<&CurrentViewer>, state: &ViewState) -> ProfileTree {
        let catalog = Catalog::builtin("en");
        let distance = DistanceFormatter::default();
        let presenter = Presenter {
            translator: &catalog,
            relative_time: &distance,
            now: now(),
        };
        build(profile, viewer, state, &presenter)
    }

    #[test]
    fn owner_sees_actions_visitor_does_not() {
        let state = ViewState::new("en", None);

        let own = render(&profile(), Some(&viewer("subject")), &state);
        let actions = own.owner_actions.unwrap();
        assert_eq!(actions.edit_label, "Edit profile");
        assert_eq!(actions.sign_out_label, "Sign out");

        assert!(render(&profile(), Some(&viewer("other")), &state).owner_actions.is_none());
        assert!(render(&profile(), None, &state).owner_actions.is_none());
    }

    #[test]
    fn modal_is_never_rendered_for_visitors() {
        let mut state = ViewState::new("en", None);
        state.open_edit(true, "Subject");
        assert!(render(&profile(), Some(&viewer("subject")), &state).edit_modal.is_some());
        assert!(render(&profile(), Some(&viewer("other")), &state).edit_modal.is_none());
    }

    #[test]
    fn header_avatar_falls_back_to_placeholder() {
        let state = ViewState::new("en", None);
        let mut p = profile();
        assert_eq!(render(&p, None, &state).header.avatar, Artwork::Placeholder);

        p.profile_image_url = Some("https://cdn/avatar.png".into());
        assert_eq!(
            render(&p, None, &state).header.avatar,
            Artwork::Image {
                url: "https://cdn/avatar.png".into(),
                alt: "Subject".into()
            }
        );
    }

    #[test]
    fn activity_rows_keep_source_order_and_label_recency() {
        let state = ViewState::new("en", None);
        let mut p = profile();
        p.recent_games.push(game("2", "Celeste"));

        let tree = render(&p, None, &state);
        assert_eq!(tree.activity.heading, "Recent activity");
        let keys: Vec<_> = tree.activity.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["1", "2"]);
        assert_eq!(
            tree.activity.rows[0].last_played.as_deref(),
            Some("Last played about 3 hours ago")
        );
    }

    #[test]
    fn recent_game_without_timestamp_or_cover_still_renders() {
        let state = ViewState::new("en", None);
        let mut p = profile();
        p.recent_games[0].last_time_played = None;
        p.recent_games[0].cover = None;

        let row = &render(&p, None, &state).activity.rows[0];
        assert_eq!(row.last_played, None);
        assert_eq!(row.cover, Artwork::Placeholder);
        assert_eq!(row.title, "Hades");
    }

    #[test]
    fn undated_recent_games_are_listed_in_source_order() {
        let mut p = profile();
        p.recent_games.push(game("2", "Celeste"));
        p.recent_games.push(game("3", "Inscryption"));
        assert!(undated_recent_games(&p).is_empty());

        p.recent_games[0].last_time_played = None;
        p.recent_games[2].last_time_played = None;
        assert_eq!(undated_recent_games(&p), ["1", "3"]);
        // Library entries never carry a timestamp requirement.
        p.library_games.push(game("4", "Doom"));
        p.library_games[0].last_time_played = None;
        assert_eq!(undated_recent_games(&p), ["1", "3"]);
    }

    #[test]
    fn library_cells_use_icon_or_fallback_and_unique_keys() {
        let state = ViewState::new("en", None);
        let mut p = profile();
        let mut with_icon = game("10", "Doom");
        with_icon.icon_url = Some("https://cdn/10/icon.png".into());
        let without_icon = game("11", "Doom");
        p.library_games = vec![with_icon, without_icon];

        let library = render(&p, None, &state).library;
        assert_eq!(library.count, 2);
        assert_eq!(library.columns, 3);
        assert!(matches!(library.cells[0].icon, Artwork::Image { .. }));
        assert_eq!(library.cells[1].icon, Artwork::Placeholder);
        assert_eq!(library.cells[0].label, library.cells[1].label);
        assert_ne!(library.cells[0].key, library.cells[1].key);
    }

    #[test]
    fn empty_profile_renders_empty_sections() {
        let state = ViewState::new("en", None);
        let mut p = profile();
        p.recent_games.clear();

        let tree = render(&p, None, &state);
        assert!(tree.activity.rows.is_empty());
        assert!(tree.library.cells.is_empty());
        assert_eq!(tree.library.count, 0);
        assert_eq!(tree.library.total_play_time, "Total playtime: 0 minutes");
    }

    #[test]
    fn total_playtime_uses_the_memoized_locale() {
        let mut p = profile();
        let mut g = game("1", "Factorio");
        g.play_time_in_seconds = 3600 * 2500;
        p.library_games = vec![g];

        let state = ViewState::new("pt-BR", None);
        let catalog = Catalog::builtin("pt-BR");
        let distance = DistanceFormatter::new("pt-BR");
        let presenter = Presenter {
            translator: &catalog,
            relative_time: &distance,
            now: now(),
        };
        let tree = build(&p, None, &state, &presenter);
        assert_eq!(tree.library.total_play_time, "Tempo total de jogo: 2.500 horas");
    }

    #[test]
    fn background_is_passed_through_from_state() {
        let bg = ProfileBackground {
            from: Rgb { r: 1, g: 2, b: 3 },
            to: Rgb { r: 4, g: 5, b: 6 },
        };
        let state = ViewState::new("en", Some(bg));
        assert_eq!(render(&profile(), None, &state).background, Some(bg));
    }
}
