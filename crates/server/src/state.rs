use sea_orm::DatabaseConnection;

/// Shared handler state; the connection is an internally pooled handle.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
