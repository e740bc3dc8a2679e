/// All primary keys are random (v4) UUIDs generated by the application.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh primary key.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4()
}
