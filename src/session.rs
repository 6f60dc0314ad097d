//! Explicit application state handed to the components that need it,
//! in place of the web build's ambient global store.

use crate::api::User;
use crate::emoji;

/// Decision for routes that only make sense while signed out
/// (login, signup): a live session bounces them back home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGate {
    Proceed,
    RedirectHome,
}

/// Sidebar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Add,
    Home,
    Projects,
    Calendar,
}

/// Which sidebar entry is highlighted for the current path. Project pages
/// keep the Projects entry active across their sub-routes.
pub fn active_nav(path: &str) -> Option<NavItem> {
    match path {
        "/add" => Some(NavItem::Add),
        "/home" => Some(NavItem::Home),
        "/calendar" => Some(NavItem::Calendar),
        _ if path.starts_with("/projects") => Some(NavItem::Projects),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    task_title: String,
    title_image: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a logged-in session
    pub fn start(&mut self, user: User) {
        log::info!("session started for {}", user.user_id);
        self.user = Some(user);
    }

    /// Tear the session down, dropping user data and any working state
    pub fn end(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session ended for {}", user.user_id);
        }
        self.task_title.clear();
        self.title_image.clear();
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn gate_signed_out_route(&self) -> RouteGate {
        if self.is_logged_in() {
            RouteGate::RedirectHome
        } else {
            RouteGate::Proceed
        }
    }

    pub fn set_task_title(&mut self, title: impl Into<String>) {
        self.task_title = title.into();
    }

    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    pub fn set_title_image(&mut self, name: impl Into<String>) {
        self.title_image = name.into();
    }

    /// Selected title image, falling back to the default emoji whenever
    /// nothing valid has been picked yet
    pub fn title_image(&self) -> &str {
        if emoji::lookup(&self.title_image).is_some() {
            &self.title_image
        } else {
            emoji::DEFAULT_TITLE_IMAGE
        }
    }
}
