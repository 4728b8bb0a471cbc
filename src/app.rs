//! Desktop host for a single profile page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use iced::widget::{column, container, text};
use iced::{Element, Length, Task};

use crate::image_client::ImageClient;
use crate::models::UserProfile;
use crate::profile_store::ProfileFile;
use crate::routes::HistoryNavigator;
use crate::settings::Theme;
use crate::ui::style::SPACING_UNIT;
use crate::ui::{ImageCache, Message, ProfileContent, Services};
use crate::view_model::{Artwork, ProfileTree};

#[derive(Debug, Clone)]
pub enum AppMsg {
    ProfileLoaded(Result<UserProfile, String>),
    Content(Message),
    ProcessImageQueue,
    ImageFetched(String, Result<Vec<u8>, String>),
}

/// Everything the shell needs before the window opens.
pub struct Boot {
    pub store: ProfileFile,
    pub services: Services,
    pub navigator: Arc<HistoryNavigator>,
    pub theme: Theme,
}

pub struct App {
    content: Option<ProfileContent>,
    store: ProfileFile,
    services: Services,
    navigator: Arc<HistoryNavigator>,
    images: ImageCache,
    image_client: ImageClient,
    refresh_requested: Arc<AtomicBool>,
    theme: Theme,
    error: Option<String>,
}

impl App {
    pub fn new(boot: Boot) -> (Self, Task<AppMsg>) {
        let app = Self {
            content: None,
            store: boot.store,
            services: boot.services,
            navigator: boot.navigator,
            images: ImageCache::default(),
            image_client: ImageClient::new(),
            refresh_requested: Arc::new(AtomicBool::new(false)),
            theme: boot.theme,
            error: None,
        };
        let task = app.load_profile();
        (app, task)
    }

    fn load_profile(&self) -> Task<AppMsg> {
        let store = self.store.clone();
        Task::perform(
            async move { store.load().await.map_err(|e| e.to_string()) },
            AppMsg::ProfileLoaded,
        )
    }

    pub fn update(&mut self, message: AppMsg) -> Task<AppMsg> {
        match message {
            AppMsg::ProfileLoaded(Ok(profile)) => {
                log::info!("loaded profile {} from {}", profile.id, self.store.path().display());
                self.error = None;
                match &mut self.content {
                    Some(content) => content.set_profile(profile),
                    None => {
                        let flag = self.refresh_requested.clone();
                        self.content = Some(ProfileContent::new(
                            profile,
                            Box::new(move || flag.store(true, Ordering::SeqCst)),
                            self.services.clone(),
                        ));
                    }
                }
                if let Some(content) = &self.content {
                    self.images.enqueue(image_urls(&content.tree()));
                }
                Task::done(AppMsg::ProcessImageQueue)
            }
            AppMsg::ProfileLoaded(Err(e)) => {
                log::error!("failed to load profile: {}", e);
                self.error = Some(e);
                Task::none()
            }
            AppMsg::Content(message) => {
                let Some(content) = &mut self.content else {
                    return Task::none();
                };
                match &message {
                    Message::SignedOut(Err(e)) => self.error = Some(e.clone()),
                    Message::SignedOut(Ok(())) => self.error = None,
                    _ => {}
                }
                let task = content.update(message).map(AppMsg::Content);
                if self.refresh_requested.swap(false, Ordering::SeqCst) {
                    Task::batch([task, self.load_profile()])
                } else {
                    task
                }
            }
            AppMsg::ProcessImageQueue => match self.images.next() {
                Some(url) => {
                    let client = self.image_client.clone();
                    let target = url.clone();
                    Task::perform(
                        async move { client.fetch(&target).await.map_err(|e| e.to_string()) },
                        move |result| AppMsg::ImageFetched(url.clone(), result),
                    )
                }
                None => Task::none(),
            },
            AppMsg::ImageFetched(url, result) => {
                self.images.finish(url, result);
                Task::done(AppMsg::ProcessImageQueue)
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMsg> {
        let body: Element<'_, AppMsg> = match &self.content {
            Some(content) => content.view(&self.images).map(AppMsg::Content),
            None => container(text(if self.error.is_some() { "" } else { "Loading…" }))
                .center(Length::Fill)
                .into(),
        };

        let mut status = column![text(self.navigator.current()).size(12)].spacing(SPACING_UNIT / 2.0);
        if let Some(error) = &self.error {
            status = status.push(text(error.clone()).size(12).style(text::danger));
        }

        column![
            container(body).height(Length::Fill),
            container(status).padding([SPACING_UNIT / 2.0, SPACING_UNIT * 2.0]),
        ]
        .into()
    }

    pub fn theme(&self) -> iced::Theme {
        match self.theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark | Theme::System => iced::Theme::Dark,
        }
    }
}

/// Every image URL the page may draw, header first.
fn image_urls(tree: &ProfileTree) -> Vec<String> {
    let artwork = std::iter::once(&tree.header.avatar)
        .chain(tree.activity.rows.iter().map(|row| &row.cover))
        .chain(tree.library.cells.iter().map(|cell| &cell.icon));

    artwork
        .filter_map(|art| match art {
            Artwork::Image { url, .. } => Some(url.clone()),
            Artwork::Placeholder => None,
        })
        .collect()
}

pub fn run(boot: Boot) -> iced::Result {
    iced::application("Gameshelf", App::update, App::view)
        .theme(App::theme)
        .window_size((1100.0, 720.0))
        .run_with(move || App::new(boot))
}
