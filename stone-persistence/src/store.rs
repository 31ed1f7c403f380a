use sea_orm::DatabaseConnection;

/// Store connectivity, decided once per request instead of sniffed ad hoc
/// before every query. The whole API stays up when the store is down:
/// handlers serve fallback content, the play-gate fails open, and score
/// submissions are acknowledged without being saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Connected,
    Disconnected,
}

/// Capability handed to each request handler. Holds the live connection when
/// there is one; `Disconnected` is a valid long-lived state, not an error.
pub struct StoreHandle {
    connection: Option<DatabaseConnection>,
}

impl StoreHandle {
    pub fn connected(connection: DatabaseConnection) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    pub fn disconnected() -> Self {
        Self { connection: None }
    }

    pub fn status(&self) -> StoreStatus {
        if self.connection.is_some() {
            StoreStatus::Connected
        } else {
            StoreStatus::Disconnected
        }
    }

    pub fn connection(&self) -> Option<&DatabaseConnection> {
        self.connection.as_ref()
    }
}
