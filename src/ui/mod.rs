pub mod activity;
pub mod edit_modal;
pub mod header;
pub mod images;
pub mod library;
pub mod model;
pub mod msg;
pub mod style;

pub use images::ImageCache;
pub use model::ViewState;
pub use msg::Message;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use iced::widget::{column, row, scrollable};
use iced::{Element, Length, Task};

use crate::i18n::Translator;
use crate::models::{CurrentViewer, ProfileUpdate, UserProfile};
use crate::relative_time::RelativeTime;
use crate::routes::{build_game_details_path, Navigator, ROOT_PATH};
use crate::session::{ProfileUpdater, SessionStore};
use crate::ui::style::SPACING_UNIT;
use crate::view_model::{self, Presenter, ProfileTree};

/// Collaborators the profile page talks to. Nothing here is owned by the page.
#[derive(Clone)]
pub struct Services {
    pub translator: Arc<dyn Translator>,
    pub relative_time: Arc<dyn RelativeTime>,
    pub navigator: Arc<dyn Navigator>,
    pub session: Arc<dyn SessionStore>,
    pub updater: Arc<dyn ProfileUpdater>,
    pub clock: fn() -> DateTime<Utc>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("language", &self.translator.language())
            .field("signed_in", &self.session.current_viewer().is_some())
            .finish()
    }
}

/// Signs the viewer out. Errors are returned to the caller untouched.
pub async fn sign_out(session: Arc<dyn SessionStore>) -> Result<(), String> {
    session.sign_out().await.map_err(|e| e.to_string())
}

pub async fn save_profile(updater: Arc<dyn ProfileUpdater>, update: ProfileUpdate) -> Result<(), String> {
    updater.update_profile(update).await.map_err(|e| e.to_string())
}

fn warn_undated(profile: &UserProfile) {
    for id in view_model::undated_recent_games(profile) {
        log::warn!("recent game {} of profile {} has no lastTimePlayed", id, profile.id);
    }
}

/// A user's public profile page: header, recent activity and library.
pub struct ProfileContent {
    profile: UserProfile,
    update_user_profile: Box<dyn Fn() + Send + Sync>,
    services: Services,
    state: ViewState,
}

impl std::fmt::Debug for ProfileContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileContent")
            .field("profile_id", &self.profile.id)
            .field("state", &self.state)
            .field("services", &self.services)
            .finish()
    }
}

impl ProfileContent {
    pub fn new(
        user_profile: UserProfile,
        update_user_profile: Box<dyn Fn() + Send + Sync>,
        services: Services,
    ) -> Self {
        let viewer = services.session.current_viewer();
        let state = ViewState::new(
            services.translator.language(),
            viewer.and_then(|v| v.profile_background),
        );
        warn_undated(&user_profile);
        Self {
            profile: user_profile,
            update_user_profile,
            services,
            state,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replaces the displayed profile wholesale, e.g. after a refresh.
    pub fn set_profile(&mut self, profile: UserProfile) {
        warn_undated(&profile);
        self.profile = profile;
        self.sync();
    }

    pub fn set_translator(&mut self, translator: Arc<dyn Translator>) {
        self.services.translator = translator;
        self.sync();
    }

    fn viewer(&self) -> Option<CurrentViewer> {
        self.services.session.current_viewer()
    }

    pub fn is_me(&self) -> bool {
        model::is_me(self.viewer().as_ref(), &self.profile)
    }

    fn sync(&mut self) {
        let background = self.viewer().and_then(|v| v.profile_background);
        let language = self.services.translator.language().to_string();
        self.state.sync(&language, background);
    }

    pub fn tree(&self) -> ProfileTree {
        let presenter = Presenter {
            translator: self.services.translator.as_ref(),
            relative_time: self.services.relative_time.as_ref(),
            now: (self.services.clock)(),
        };
        view_model::build(&self.profile, self.viewer().as_ref(), &self.state, &presenter)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle(message);
        self.sync();
        task
    }

    fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenGame(game) => {
                self.services.navigator.navigate(&build_game_details_path(&game));
                Task::none()
            }
            Message::EditProfile => {
                let is_me = self.is_me();
                if !self.state.open_edit(is_me, &self.profile.display_name) {
                    log::debug!("edit profile ignored (is_me = {})", is_me);
                }
                Task::none()
            }
            Message::CloseEditModal => {
                self.state.close_edit();
                Task::none()
            }
            Message::DisplayNameChanged(value) => {
                if let Some(form) = self.state.edit_form_mut() {
                    form.display_name = value;
                    form.error = None;
                }
                Task::none()
            }
            Message::SaveProfile => {
                let Some(form) = self.state.edit_form_mut() else {
                    return Task::none();
                };
                if !form.can_save() {
                    return Task::none();
                }
                form.saving = true;
                let update = ProfileUpdate {
                    display_name: form.display_name.trim().to_string(),
                };
                let updater = self.services.updater.clone();
                Task::perform(save_profile(updater, update), Message::ProfileSaved)
            }
            Message::ProfileSaved(Ok(())) => {
                (self.update_user_profile)();
                self.state.close_edit();
                Task::none()
            }
            Message::ProfileSaved(Err(reason)) => {
                log::error!("profile update failed: {}", reason);
                let error = self
                    .services
                    .translator
                    .translate("edit_profile_failed", &[("reason", &reason)]);
                if let Some(form) = self.state.edit_form_mut() {
                    form.saving = false;
                    form.error = Some(error);
                }
                Task::none()
            }
            Message::SignOut => {
                if !self.is_me() || self.state.signing_out() {
                    log::debug!("sign out ignored");
                    return Task::none();
                }
                self.state.set_signing_out(true);
                let session = self.services.session.clone();
                Task::perform(sign_out(session), Message::SignedOut)
            }
            Message::SignedOut(result) => {
                self.state.set_signing_out(false);
                match result {
                    Ok(()) => self.services.navigator.navigate(ROOT_PATH),
                    Err(e) => log::error!("sign out failed: {}", e),
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, images: &'a ImageCache) -> Element<'a, Message> {
        let tree = self.tree();

        let sections = row![
            activity::view(tree.activity, images),
            library::view(tree.library, images),
        ]
        .spacing(SPACING_UNIT * 4.0);

        let page: Element<'a, Message> = scrollable(
            column![
                header::view(tree.header, tree.owner_actions, tree.background, images),
                sections,
            ]
            .spacing(SPACING_UNIT * 3.0)
            .padding(SPACING_UNIT * 3.0),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match tree.edit_modal {
            Some(modal) => edit_modal::overlay(page, modal),
            None => page,
        }
    }
}
