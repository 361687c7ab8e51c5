use bellbird_feed::{
    ClassDirectory, ClientConfig, ConnectionManager, ConsoleSurface, Dispatcher, FeedResult,
    HttpClassDirectory, NotificationStore,
};

#[tokio::main]
async fn main() -> FeedResult<()> {
    tracing_subscriber::fmt::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(%error, "incomplete environment, using default configuration");
            ClientConfig::default()
        }
    };
    tracing::info!(host = %config.host, viewer = config.viewer.id, "starting feed client");

    let directory = HttpClassDirectory::new(config.lessons_endpoint()?);
    let classes = match directory.list_classes().await {
        Ok(classes) => classes,
        Err(error) => {
            tracing::warn!(%error, "class listing unavailable, starting without classes");
            Vec::new()
        }
    };

    let store = match config.store_capacity {
        Some(capacity) => NotificationStore::with_capacity(capacity),
        None => NotificationStore::new(),
    };
    let mut dispatcher = Dispatcher::new(config.viewer, classes, store, ConsoleSurface);

    let mut connection = ConnectionManager::new(config.notification_endpoint()?);
    connection.connect().await?;
    connection.run(&mut dispatcher).await?;

    // No automatic retry: a dropped connection means no live updates
    // until the client is started again.
    tracing::info!("notification socket gone, live updates stopped");
    Ok(())
}
