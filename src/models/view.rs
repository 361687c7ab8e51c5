// src/models/view.rs
use serde::Deserialize;

use crate::models::event::UserId;

/// The renderable, UI-agnostic form of one notification.
///
/// `content` may carry limited `<em>` markup; every piece of
/// user-controlled text inside it is already HTML-escaped by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub redirect_url: String,
    pub icon_src: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

/// Identity of the viewing session. Externally supplied, used only to
/// suppress self-authored events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
}

impl Viewer {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// One entry of the externally supplied class list, used to resolve the
/// class name for class-scoped events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
}
