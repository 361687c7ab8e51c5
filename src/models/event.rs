// src/models/event.rs
use serde::Deserialize;
use serde_json::Value;

use crate::models::view::Classroom;

pub type UserId = i64;
pub type ThreadId = i64;
pub type MessageId = i64;

/// One inbound frame, as the server shapes it: a type tag, a
/// type-dependent params object, and two envelope fields.
///
/// `type` and `created_date` are mandatory; a frame without them is not an
/// event. `params` and `server_group` stay loose here — the mapper gives
/// params its concrete shape once the type tag is known.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "empty_params")]
    pub params: Value,
    pub created_date: EventDate,
    #[serde(default)]
    pub server_group: Option<String>, // e.g. "notification-class-42"
}

fn empty_params() -> Value {
    Value::Object(Default::default())
}

impl NotificationEvent {
    /// Author identity carried in the params, when the payload has one.
    /// Every recognized event type does; unknown shapes yield `None`.
    pub fn author_id(&self) -> Option<UserId> {
        self.params.get("author")?.get("id")?.as_i64()
    }
}

/// Creation time broken into integer display components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EventDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
}

impl std::fmt::Display for EventDate {
    /// Verbatim component concatenation, no zero-padding: `24/3/1997 10h5`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{} {}h{}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The closed set of event types this client renders.
///
/// Two families (thread creation, message posted) across three forum
/// scopes. Adding a type means adding a variant here and extending the
/// exhaustive matches the compiler will then point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PrivateThread,
    PublicThread,
    ClassThread,
    PrivateMessage,
    PublicMessage,
    ClassMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFamily {
    Thread,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    Private,
    Public,
    Class,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::PrivateThread,
        EventKind::PublicThread,
        EventKind::ClassThread,
        EventKind::PrivateMessage,
        EventKind::PublicMessage,
        EventKind::ClassMessage,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "new_private_forum_thread" => Some(EventKind::PrivateThread),
            "new_public_forum_thread" => Some(EventKind::PublicThread),
            "new_class_forum_thread" => Some(EventKind::ClassThread),
            "new_private_forum_message" => Some(EventKind::PrivateMessage),
            "new_public_forum_message" => Some(EventKind::PublicMessage),
            "new_class_forum_message" => Some(EventKind::ClassMessage),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::PrivateThread => "new_private_forum_thread",
            EventKind::PublicThread => "new_public_forum_thread",
            EventKind::ClassThread => "new_class_forum_thread",
            EventKind::PrivateMessage => "new_private_forum_message",
            EventKind::PublicMessage => "new_public_forum_message",
            EventKind::ClassMessage => "new_class_forum_message",
        }
    }

    pub fn family(&self) -> EventFamily {
        match self {
            EventKind::PrivateThread | EventKind::PublicThread | EventKind::ClassThread => {
                EventFamily::Thread
            }
            EventKind::PrivateMessage | EventKind::PublicMessage | EventKind::ClassMessage => {
                EventFamily::Message
            }
        }
    }

    pub fn scope(&self) -> EventScope {
        match self {
            EventKind::PrivateThread | EventKind::PrivateMessage => EventScope::Private,
            EventKind::PublicThread | EventKind::PublicMessage => EventScope::Public,
            EventKind::ClassThread | EventKind::ClassMessage => EventScope::Class,
        }
    }
}

// Typed params payloads, one per family

#[derive(Debug, Clone, Deserialize)]
pub struct ThreadParams {
    pub thread_id: ThreadId,
    pub thread_title: String,
    pub author: Author,
    /// Embedded class object, present when the producer resolved it already.
    #[serde(default)]
    pub lesson: Option<Classroom>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageParams {
    pub thread_id: ThreadId,
    pub message_id: MessageId,
    pub thread_title: String,
    pub author: Author,
}
