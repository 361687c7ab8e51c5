// src/services/presenter.rs
use crate::models::view::ViewModel;
use crate::services::store::NotificationStore;
use crate::utils::markup::escape_html;

/// The unread indicator's two visual states. Resetting to `Inactive` is
/// the surface's own concern (the user acknowledging the feed), never
/// triggered from this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Active,
    Inactive,
}

/// The external UI collaborator: an indicator element plus a popover
/// overlay with replaceable body content.
pub trait FeedSurface {
    fn set_indicator(&mut self, state: IndicatorState);
    fn popover_is_open(&self) -> bool;
    fn set_popover_content(&mut self, markup: String);
    fn render_popover(&mut self);
}

/// Renders a store snapshot as the popover's list markup.
///
/// Pure and deterministic: the same snapshot yields byte-identical output,
/// which is what makes re-presenting idempotent.
pub fn render_feed<'a>(items: impl Iterator<Item = &'a ViewModel>) -> String {
    let mut markup = String::from("<ul class=\"list-group\">");
    for item in items {
        markup.push_str(&format!(
            "<li class=\"list-group-item\">\
             <a href=\"{url}\">\
             <img src=\"{icon}\" alt=\"\"/>\
             <strong>{title}</strong> {content} \
             <small>{date}</small>\
             </a></li>",
            url = escape_html(&item.redirect_url),
            icon = escape_html(&item.icon_src),
            title = escape_html(&item.title),
            // content carries its own pre-escaped markup
            content = item.content,
            date = escape_html(&item.date),
        ));
    }
    markup.push_str("</ul>");
    markup
}

/// Pushes store snapshots out to the surface: fresh popover content, the
/// indicator lit, and a re-render when the popover is already open so the
/// visible view never goes stale.
pub struct Presenter<S: FeedSurface> {
    surface: S,
}

impl<S: FeedSurface> Presenter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn present(&mut self, store: &NotificationStore) {
        let markup = render_feed(store.snapshot());
        self.surface.set_indicator(IndicatorState::Active);
        self.surface.set_popover_content(markup);
        if self.surface.popover_is_open() {
            self.surface.render_popover();
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Surface that just logs what it is told, for the demo binary and for
/// running headless.
pub struct ConsoleSurface;

impl FeedSurface for ConsoleSurface {
    fn set_indicator(&mut self, state: IndicatorState) {
        tracing::info!(?state, "indicator");
    }

    fn popover_is_open(&self) -> bool {
        false
    }

    fn set_popover_content(&mut self, markup: String) {
        tracing::info!(bytes = markup.len(), "popover content replaced");
        tracing::debug!(%markup, "popover markup");
    }

    fn render_popover(&mut self) {}
}
