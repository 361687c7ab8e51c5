// src/services/filter.rs
use crate::models::event::NotificationEvent;
use crate::models::view::Viewer;

/// Suppresses events the viewer authored themself.
///
/// Applied exactly once per event, after decode and before mapping, so a
/// user never sees their own actions echoed back in their feed. An event
/// without a readable author identity passes through.
#[derive(Debug, Clone, Copy)]
pub struct SelfOriginFilter {
    viewer: Viewer,
}

impl SelfOriginFilter {
    pub fn new(viewer: Viewer) -> Self {
        Self { viewer }
    }

    pub fn suppresses(&self, event: &NotificationEvent) -> bool {
        event.author_id() == Some(self.viewer.id)
    }
}
