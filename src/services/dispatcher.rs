// src/services/dispatcher.rs
use crate::models::view::{Classroom, Viewer};
use crate::services::connection::FrameHandler;
use crate::services::decoder::decode_frame;
use crate::services::filter::SelfOriginFilter;
use crate::services::mapper::NotificationMapper;
use crate::services::presenter::{FeedSurface, Presenter};
use crate::services::store::NotificationStore;

/// The pipeline glue: decode → filter → map → store → present.
///
/// Every per-event failure stops at this boundary, logged and swallowed;
/// the feed simply does not grow for that frame. Nothing here can take
/// the connection down.
pub struct Dispatcher<S: FeedSurface> {
    filter: SelfOriginFilter,
    mapper: NotificationMapper,
    store: NotificationStore,
    presenter: Presenter<S>,
}

impl<S: FeedSurface> Dispatcher<S> {
    pub fn new(
        viewer: Viewer,
        classes: Vec<Classroom>,
        store: NotificationStore,
        surface: S,
    ) -> Self {
        Self {
            filter: SelfOriginFilter::new(viewer),
            mapper: NotificationMapper::new(classes),
            store,
            presenter: Presenter::new(surface),
        }
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }
}

impl<S: FeedSurface> FrameHandler for Dispatcher<S> {
    fn on_frame(&mut self, raw: &str) {
        let event = match decode_frame(raw) {
            Ok(event) => event,
            Err(error) => {
                tracing::warn!(%error, "dropping undecodable frame");
                return;
            }
        };

        if self.filter.suppresses(&event) {
            tracing::debug!(kind = %event.kind, "suppressing self-authored event");
            return;
        }

        let view = match self.mapper.map(&event) {
            Ok(view) => view,
            Err(error) => {
                tracing::warn!(kind = %event.kind, %error, "dropping unmappable event");
                return;
            }
        };

        self.store.prepend(view);
        self.presenter.present(&self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::presenter::IndicatorState;

    #[derive(Default)]
    struct RecordingSurface {
        indicator: Option<IndicatorState>,
        content: Option<String>,
        presents: usize,
    }

    impl FeedSurface for RecordingSurface {
        fn set_indicator(&mut self, state: IndicatorState) {
            self.indicator = Some(state);
        }

        fn popover_is_open(&self) -> bool {
            false
        }

        fn set_popover_content(&mut self, markup: String) {
            self.content = Some(markup);
            self.presents += 1;
        }

        fn render_popover(&mut self) {}
    }

    fn dispatcher(viewer_id: i64) -> Dispatcher<RecordingSurface> {
        Dispatcher::new(
            Viewer::new(viewer_id),
            vec![Classroom {
                id: 42,
                name: "Histoire 101".to_string(),
            }],
            NotificationStore::new(),
            RecordingSurface::default(),
        )
    }

    fn thread_frame(author_id: i64, title: &str) -> String {
        format!(
            r#"{{
                "type": "new_private_forum_thread",
                "params": {{
                    "thread_id": 5,
                    "thread_title": "{title}",
                    "author": {{"id": {author_id}, "first_name": "Ernest", "last_name": "Biroute"}}
                }},
                "created_date": {{"day": 24, "month": 3, "year": 1997, "hour": 10, "minute": 5}}
            }}"#
        )
    }

    #[test]
    fn test_accepted_event_grows_feed_and_presents() {
        let mut dispatcher = dispatcher(1);
        dispatcher.on_frame(&thread_frame(9, "Midterm"));

        assert_eq!(dispatcher.store().len(), 1);
        assert_eq!(dispatcher.surface().indicator, Some(IndicatorState::Active));
        let content = dispatcher.surface().content.as_deref().unwrap();
        assert!(content.contains("Ernest Biroute"));
        assert!(content.contains("<em>Midterm</em>"));
    }

    #[test]
    fn test_self_authored_event_never_reaches_store() {
        let mut dispatcher = dispatcher(9);
        dispatcher.on_frame(&thread_frame(9, "Midterm"));

        assert!(dispatcher.store().is_empty());
        assert_eq!(dispatcher.surface().presents, 0);
    }

    #[test]
    fn test_unknown_type_leaves_store_untouched() {
        let mut dispatcher = dispatcher(1);
        dispatcher.on_frame(
            r#"{"type": "unknown_event", "params": {},
                "created_date": {"day":1,"month":1,"year":2020,"hour":0,"minute":0}}"#,
        );

        assert!(dispatcher.store().is_empty());
        assert_eq!(dispatcher.surface().presents, 0);
    }

    #[test]
    fn test_malformed_frame_is_swallowed() {
        let mut dispatcher = dispatcher(1);
        dispatcher.on_frame("{{{ not json");
        assert!(dispatcher.store().is_empty());
    }

    #[test]
    fn test_feed_stays_newest_first_across_frames() {
        let mut dispatcher = dispatcher(1);
        dispatcher.on_frame(&thread_frame(9, "First"));
        dispatcher.on_frame(&thread_frame(9, "Second"));

        let titles: Vec<_> = dispatcher
            .store()
            .snapshot()
            .map(|v| v.content.clone())
            .collect();
        assert_eq!(titles.len(), 2);
        assert!(titles[0].contains("Second"));
        assert!(titles[1].contains("First"));
    }

    #[test]
    fn test_bad_frames_do_not_break_later_good_ones() {
        let mut dispatcher = dispatcher(1);
        dispatcher.on_frame("garbage");
        dispatcher.on_frame(&thread_frame(9, "Midterm"));
        assert_eq!(dispatcher.store().len(), 1);
    }
}
