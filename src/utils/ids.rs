use uuid::Uuid;

/// Generates a unique id for a special tile.
pub fn new_tile_id() -> String {
    Uuid::new_v4().to_string()
}
