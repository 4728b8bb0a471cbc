use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use gameshelf::i18n::Catalog;
use gameshelf::models::{CurrentViewer, Rgb, ProfileBackground};
use gameshelf::profile_store::ProfileFile;
use gameshelf::relative_time::DistanceFormatter;
use gameshelf::routes::HistoryNavigator;
use gameshelf::session::LocalSession;
use gameshelf::ui::{Message, ProfileContent, Services};
use gameshelf::view_model::Artwork;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/profile.json")
}

fn june_15() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

struct Page {
    content: ProfileContent,
    navigator: Arc<HistoryNavigator>,
    refreshes: Arc<AtomicUsize>,
}

async fn open(language: &str, viewer: Option<CurrentViewer>) -> Page {
    let store = ProfileFile::new(fixture_path());
    let profile = store.load().await.expect("fixture parses");

    let navigator = Arc::new(HistoryNavigator::default());
    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = refreshes.clone();

    let services = Services {
        translator: Arc::new(Catalog::builtin(language)),
        relative_time: Arc::new(DistanceFormatter::new(language)),
        navigator: navigator.clone(),
        session: Arc::new(LocalSession::ephemeral(viewer)),
        updater: Arc::new(store),
        clock: june_15,
    };

    let content = ProfileContent::new(
        profile,
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
        services,
    );
    Page {
        content,
        navigator,
        refreshes,
    }
}

fn owner() -> CurrentViewer {
    CurrentViewer {
        id: "a1b2c3".into(),
        profile_background: Some(ProfileBackground {
            from: Rgb { r: 0x1c, g: 0x1c, b: 0x1c },
            to: Rgb { r: 0x4a, g: 0x90, b: 0xe2 },
        }),
    }
}

#[tokio::test]
async fn visitor_sees_feed_library_and_totals() {
    let page = open("en", None).await;
    let tree = page.content.tree();

    assert_eq!(tree.header.display_name, "Nightjar");
    assert_eq!(tree.header.avatar, Artwork::Placeholder);
    assert!(tree.owner_actions.is_none());
    assert!(tree.background.is_none());

    let titles: Vec<_> = tree.activity.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Hades", "Celeste"]);
    assert_eq!(
        tree.activity.rows[0].last_played.as_deref(),
        Some("Last played about 15 hours ago")
    );

    // 41220 + 7800 + 0 + 360000 seconds = 113.6 hours
    assert_eq!(tree.library.count, 4);
    assert_eq!(tree.library.total_play_time, "Total playtime: 114 hours");

    let keys: Vec<_> = tree.library.cells.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["1145360", "504230", "my-homebrew", "427520"]);
    assert!(matches!(tree.library.cells[0].icon, Artwork::Image { .. }));
    assert_eq!(tree.library.cells[2].icon, Artwork::Placeholder);
}

#[tokio::test]
async fn any_game_click_routes_by_identity() {
    let mut page = open("en", None).await;
    let tree = page.content.tree();

    let _ = page.content.update(Message::OpenGame(tree.activity.rows[1].game.clone()));
    let _ = page.content.update(Message::OpenGame(tree.library.cells[2].game.clone()));

    assert_eq!(
        page.navigator.history(),
        vec!["/", "/game/steam/504230?title=Celeste", "/game/custom/my-homebrew?title=Celeste"]
    );
}

#[tokio::test]
async fn owner_gets_actions_background_and_localized_copy() {
    let mut page = open("pt-BR", Some(owner())).await;
    let tree = page.content.tree();

    let actions = tree.owner_actions.expect("owner actions");
    assert_eq!(actions.edit_label, "Editar perfil");
    assert_eq!(actions.sign_out_label, "Sair da conta");
    assert_eq!(tree.background, Some(owner().profile_background.unwrap()));
    assert_eq!(tree.library.total_play_time, "Tempo total de jogo: 114 horas");
    assert_eq!(
        tree.activity.rows[0].last_played.as_deref(),
        Some("Última sessão há cerca de 15 horas")
    );

    let _ = page.content.update(Message::EditProfile);
    let modal = page.content.tree().edit_modal.expect("modal open");
    assert_eq!(modal.display_name, "Nightjar");

    let _ = page.content.update(Message::ProfileSaved(Ok(())));
    assert_eq!(page.refreshes.load(Ordering::SeqCst), 1);
    assert!(page.content.tree().edit_modal.is_none());
}
