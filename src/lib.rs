//! Public profile page of a desktop game library client.
//!
//! [`ui::ProfileContent`] is the page itself. It reads a fully loaded
//! [`models::UserProfile`] and talks to its collaborators (translation,
//! relative dates, navigation, session) through the traits in [`i18n`],
//! [`relative_time`], [`routes`] and [`session`]. [`view_model::build`] is the
//! pure mapping behind it.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod image_client;
pub mod models;
pub mod playtime;
pub mod profile_store;
pub mod relative_time;
pub mod routes;
pub mod session;
pub mod settings;
pub mod ui;
pub mod view_model;
