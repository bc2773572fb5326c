//! Rooms and their open-side flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Coord, Direction};

bitflags! {
    /// Open (traversable) sides of a room
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Connectivity: u8 {
        const UP = 0x01;
        const DOWN = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
    }
}

// Manual serde impl for Connectivity
impl Serialize for Connectivity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Connectivity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Connectivity::from_bits_truncate(bits))
    }
}

impl Connectivity {
    /// Compact label, one letter per open side in U D L R order, `-` if closed
    pub fn abbrev(&self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        [
            (Connectivity::UP, 'U'),
            (Connectivity::DOWN, 'D'),
            (Connectivity::LEFT, 'L'),
            (Connectivity::RIGHT, 'R'),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, c)| *c)
        .collect()
    }

    /// Parse a label produced by [`Connectivity::abbrev`], in any letter order
    pub fn from_abbrev(label: &str) -> Option<Connectivity> {
        let label = label.trim();
        if label == "-" {
            return Some(Connectivity::empty());
        }
        if label.is_empty() {
            return None;
        }
        label.chars().try_fold(Connectivity::empty(), |acc, c| {
            let flag = match c.to_ascii_uppercase() {
                'U' => Connectivity::UP,
                'D' => Connectivity::DOWN,
                'L' => Connectivity::LEFT,
                'R' => Connectivity::RIGHT,
                _ => return None,
            };
            Some(acc | flag)
        })
    }

    /// Open sides as directions, in right, left, up, down order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.contains(dir.flag()))
    }
}

/// A generated room occupying one grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    grid_position: Coord,

    /// Sides opened by the connection pass
    pub connectivity: Connectivity,

    /// Reserved for rule-based generation; never set by the walk
    pub possible: Connectivity,
}

impl Room {
    pub fn new(grid_position: Coord) -> Self {
        Self {
            grid_position,
            connectivity: Connectivity::empty(),
            possible: Connectivity::empty(),
        }
    }

    /// Cell this room occupies
    pub fn grid_position(&self) -> Coord {
        self.grid_position
    }

    /// Open additional sides. Sides are never closed again.
    pub fn open(&mut self, sides: Connectivity) {
        self.connectivity |= sides;
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.connectivity.contains(dir.flag())
    }

    /// Number of open sides
    pub fn degree(&self) -> u32 {
        self.connectivity.bits().count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_closed() {
        let room = Room::new(Coord::new(3, 4));
        assert_eq!(room.grid_position(), Coord::new(3, 4));
        assert!(room.connectivity.is_empty());
        assert!(room.possible.is_empty());
        assert_eq!(room.degree(), 0);
    }

    #[test]
    fn test_open_accumulates() {
        let mut room = Room::new(Coord::ZERO);
        room.open(Connectivity::UP);
        room.open(Connectivity::LEFT);
        room.open(Connectivity::UP);
        assert_eq!(room.connectivity, Connectivity::UP | Connectivity::LEFT);
        assert!(room.is_open(Direction::Up));
        assert!(!room.is_open(Direction::Down));
        assert_eq!(room.degree(), 2);
    }

    #[test]
    fn test_abbrev() {
        assert_eq!(Connectivity::empty().abbrev(), "-");
        assert_eq!((Connectivity::RIGHT | Connectivity::DOWN).abbrev(), "DR");
        assert_eq!(Connectivity::all().abbrev(), "UDLR");
    }

    #[test]
    fn test_from_abbrev() {
        assert_eq!(Connectivity::from_abbrev("-"), Some(Connectivity::empty()));
        assert_eq!(
            Connectivity::from_abbrev("rd"),
            Some(Connectivity::RIGHT | Connectivity::DOWN)
        );
        assert_eq!(Connectivity::from_abbrev("UDLR"), Some(Connectivity::all()));
        assert_eq!(Connectivity::from_abbrev("UX"), None);
        assert_eq!(Connectivity::from_abbrev(""), None);
    }

    #[test]
    fn test_directions_order() {
        let dirs: Vec<_> = Connectivity::all().directions().collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn test_connectivity_serde_bits() {
        let flags = Connectivity::UP | Connectivity::RIGHT;
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, "9");
        let back: Connectivity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}
