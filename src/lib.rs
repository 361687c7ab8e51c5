pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;


// Re-export commonly used types
pub use config::ClientConfig;
pub use errors::{
    ConnectionError, DecodeError, DirectoryError, FeedError, FeedResult, MapError,
};
pub use models::event::{EventKind, NotificationEvent};
pub use models::view::{Classroom, ViewModel, Viewer};
pub use services::connection::{ConnectionManager, ConnectionState, FrameHandler};
pub use services::directory::{ClassDirectory, HttpClassDirectory, StaticClassDirectory};
pub use services::dispatcher::Dispatcher;
pub use services::presenter::{ConsoleSurface, FeedSurface, IndicatorState, Presenter};
pub use services::store::NotificationStore;
