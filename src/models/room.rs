//! Room model.
//!
//! Rooms are the physical resources sessions are placed into. A room is
//! identified by its (location, name) pair; two sites may each have a
//! "Room 1". The allocator books at most one session per room and slot,
//! regardless of the stated seat capacity.

use serde::{Deserialize, Serialize};

/// A bookable teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Site or building the room belongs to.
    pub location: String,
    /// Room name, unique within its location.
    pub name: String,
    /// Seat capacity. Informational only: occupancy is always one
    /// session per slot, whatever this says.
    pub capacity: Option<u32>,
}

impl Room {
    /// Creates a room at the given location.
    pub fn new(location: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
            capacity: None,
        }
    }

    /// Sets the (informational) seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// The default room inventory: two sites with four rooms each.
    pub fn default_inventory() -> Vec<Room> {
        let mut rooms = Vec::new();
        for location in ["Quai de la Rapée", "Ledru-Rollin"] {
            for i in 1..=4 {
                rooms.push(Room::new(location, format!("Salle {i}")));
            }
        }
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("Main site", "Room 3").with_capacity(40);
        assert_eq!(r.location, "Main site");
        assert_eq!(r.name, "Room 3");
        assert_eq!(r.capacity, Some(40));

        let bare = Room::new("Annex", "Room 1");
        assert_eq!(bare.capacity, None);
    }

    #[test]
    fn test_default_inventory() {
        let rooms = Room::default_inventory();
        assert_eq!(rooms.len(), 8);
        assert_eq!(rooms[0].location, "Quai de la Rapée");
        assert_eq!(rooms[0].name, "Salle 1");
        assert_eq!(rooms[7].location, "Ledru-Rollin");
        assert_eq!(rooms[7].name, "Salle 4");
    }

    #[test]
    fn test_room_serde_roundtrip() {
        let r = Room::new("Main site", "Room 3").with_capacity(12);
        let json = serde_json::to_string(&r).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
