// src/services/mapper.rs
use crate::errors::MapError;
use crate::models::event::{
    EventFamily, EventKind, EventScope, MessageParams, NotificationEvent, ThreadParams,
};
use crate::models::view::{Classroom, ViewModel};
use crate::utils::markup::{emphasize, escape_html};

pub const THREAD_ICON: &str = "/static/notification/thread.svg";
pub const MESSAGE_ICON: &str = "/static/notification/message.svg";

/// Pure event-to-view mapping, dispatched on the closed `EventKind` enum.
///
/// Holds the viewer's class list so class-scoped events can name their
/// class even when the producer only sent a routing group.
#[derive(Debug, Clone, Default)]
pub struct NotificationMapper {
    classes: Vec<Classroom>,
}

impl NotificationMapper {
    pub fn new(classes: Vec<Classroom>) -> Self {
        Self { classes }
    }

    pub fn map(&self, event: &NotificationEvent) -> Result<ViewModel, MapError> {
        let kind = EventKind::from_tag(&event.kind)
            .ok_or_else(|| MapError::UnknownType(event.kind.clone()))?;
        let date = event.created_date.to_string();

        match kind.family() {
            EventFamily::Thread => {
                let params: ThreadParams = serde_json::from_value(event.params.clone())
                    .map_err(|source| MapError::InvalidParams {
                        kind: kind.tag(),
                        source,
                    })?;
                self.map_thread(kind, &params, event.server_group.as_deref(), date)
            }
            EventFamily::Message => {
                let params: MessageParams = serde_json::from_value(event.params.clone())
                    .map_err(|source| MapError::InvalidParams {
                        kind: kind.tag(),
                        source,
                    })?;
                Ok(Self::map_message(kind, &params, date))
            }
        }
    }

    fn map_thread(
        &self,
        kind: EventKind,
        params: &ThreadParams,
        server_group: Option<&str>,
        date: String,
    ) -> Result<ViewModel, MapError> {
        let author_name = params.author.full_name();
        let author = escape_html(&author_name);
        let thread_title = emphasize(&params.thread_title);

        let (title, content) = match kind.scope() {
            EventScope::Private => (
                "Forum: nouvelle discussion privée",
                format!("{} a créé la discussion {}", author, thread_title),
            ),
            EventScope::Public => (
                "Forum: nouvelle discussion publique",
                format!("{} a créé la discussion {}", author, thread_title),
            ),
            EventScope::Class => {
                let class_name = self.resolve_class(params, server_group)?;
                (
                    "Forum: nouvelle discussion de classe",
                    format!(
                        "{} a créé la discussion {} dans la classe {}",
                        author,
                        thread_title,
                        escape_html(&class_name)
                    ),
                )
            }
        };

        Ok(ViewModel {
            redirect_url: format!("/forum/thread/{}", params.thread_id),
            icon_src: THREAD_ICON.to_string(),
            title: title.to_string(),
            content,
            date,
        })
    }

    fn map_message(kind: EventKind, params: &MessageParams, date: String) -> ViewModel {
        let title = match kind.scope() {
            EventScope::Private => "Forum: nouveau message privé",
            EventScope::Public => "Forum: nouveau message public",
            EventScope::Class => "Forum: nouveau message de classe",
        };

        ViewModel {
            redirect_url: format!(
                "/forum/thread/{}/#message-{}",
                params.thread_id, params.message_id
            ),
            icon_src: MESSAGE_ICON.to_string(),
            title: title.to_string(),
            content: format!(
                "{} a répondu dans la discussion {}",
                escape_html(&params.author.full_name()),
                emphasize(&params.thread_title)
            ),
            date,
        }
    }

    /// Class name for a class-scoped thread: the embedded `lesson` object
    /// wins; otherwise the trailing id of the routing group (for example
    /// `notification-class-42`) is matched against the class list.
    fn resolve_class(
        &self,
        params: &ThreadParams,
        server_group: Option<&str>,
    ) -> Result<String, MapError> {
        if let Some(lesson) = &params.lesson {
            return Ok(lesson.name.clone());
        }

        server_group
            .and_then(|group| group.rsplit('-').next())
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| self.classes.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .ok_or(MapError::MissingField("lesson"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventDate;
    use serde_json::{json, Value};

    fn event(kind: &str, params: Value, server_group: Option<&str>) -> NotificationEvent {
        NotificationEvent {
            kind: kind.to_string(),
            params,
            created_date: EventDate {
                day: 24,
                month: 3,
                year: 1997,
                hour: 10,
                minute: 5,
            },
            server_group: server_group.map(str::to_string),
        }
    }

    fn thread_params() -> Value {
        json!({
            "thread_id": 5,
            "thread_title": "Midterm",
            "author": {"id": 9, "first_name": "Ernest", "last_name": "Biroute"}
        })
    }

    fn message_params() -> Value {
        json!({
            "thread_id": 5,
            "message_id": 77,
            "thread_title": "Midterm",
            "author": {"id": 9, "first_name": "Ernest", "last_name": "Biroute"}
        })
    }

    #[test]
    fn test_private_thread_scenario() {
        let mapper = NotificationMapper::default();
        let view = mapper
            .map(&event("new_private_forum_thread", thread_params(), None))
            .unwrap();

        assert_eq!(view.redirect_url, "/forum/thread/5");
        assert_eq!(view.title, "Forum: nouvelle discussion privée");
        assert!(view.content.contains("Ernest Biroute"));
        assert!(view.content.contains("Midterm"));
        assert_eq!(view.date, "24/3/1997 10h5");
    }

    #[test]
    fn test_message_redirect_carries_fragment() {
        let mapper = NotificationMapper::default();
        let view = mapper
            .map(&event("new_public_forum_message", message_params(), None))
            .unwrap();

        assert_eq!(view.redirect_url, "/forum/thread/5/#message-77");
        assert_eq!(view.title, "Forum: nouveau message public");
        assert!(view.content.contains("<em>Midterm</em>"));
    }

    #[test]
    fn test_all_kinds_produce_complete_views() {
        let mapper = NotificationMapper::new(vec![Classroom {
            id: 42,
            name: "Histoire 101".to_string(),
        }]);

        for kind in EventKind::ALL {
            let params = match kind.family() {
                EventFamily::Thread => thread_params(),
                EventFamily::Message => message_params(),
            };
            let view = mapper
                .map(&event(kind.tag(), params, Some("notification-class-42")))
                .unwrap();

            assert!(!view.redirect_url.is_empty(), "{}", kind.tag());
            assert!(!view.title.is_empty(), "{}", kind.tag());
            assert!(!view.content.is_empty(), "{}", kind.tag());
            assert!(!view.icon_src.is_empty(), "{}", kind.tag());
        }
    }

    #[test]
    fn test_class_resolved_from_embedded_lesson() {
        let mapper = NotificationMapper::default();
        let mut params = thread_params();
        params["lesson"] = json!({"id": 3, "name": "Chimie"});

        let view = mapper
            .map(&event("new_class_forum_thread", params, None))
            .unwrap();
        assert_eq!(view.title, "Forum: nouvelle discussion de classe");
        assert!(view.content.contains("Chimie"));
    }

    #[test]
    fn test_class_resolved_from_server_group() {
        let mapper = NotificationMapper::new(vec![Classroom {
            id: 42,
            name: "Histoire 101".to_string(),
        }]);
        let view = mapper
            .map(&event(
                "new_class_forum_thread",
                thread_params(),
                Some("notification-class-42"),
            ))
            .unwrap();
        assert!(view.content.contains("Histoire 101"));
    }

    #[test]
    fn test_unresolvable_class_is_dropped() {
        let mapper = NotificationMapper::default();
        let result = mapper.map(&event(
            "new_class_forum_thread",
            thread_params(),
            Some("notification-class-42"),
        ));
        assert!(matches!(result, Err(MapError::MissingField("lesson"))));
    }

    #[test]
    fn test_unknown_type_fails_without_panicking() {
        let mapper = NotificationMapper::default();
        let result = mapper.map(&event("unknown_event", json!({}), None));
        assert!(matches!(result, Err(MapError::UnknownType(tag)) if tag == "unknown_event"));
    }

    #[test]
    fn test_incomplete_params_are_invalid() {
        let mapper = NotificationMapper::default();
        let result = mapper.map(&event(
            "new_private_forum_message",
            json!({"thread_id": 5}),
            None,
        ));
        assert!(matches!(result, Err(MapError::InvalidParams { .. })));
    }

    #[test]
    fn test_hostile_text_is_escaped() {
        let mapper = NotificationMapper::default();
        let params = json!({
            "thread_id": 5,
            "thread_title": "<script>alert(1)</script>",
            "author": {"id": 9, "first_name": "<b>Eve</b>", "last_name": "&"}
        });

        let view = mapper
            .map(&event("new_private_forum_thread", params, None))
            .unwrap();
        assert!(!view.content.contains("<script>"));
        assert!(!view.content.contains("<b>"));
        assert!(view.content.contains("&lt;script&gt;"));
        assert!(view.content.contains("&lt;b&gt;Eve&lt;/b&gt; &amp;"));
    }
}
