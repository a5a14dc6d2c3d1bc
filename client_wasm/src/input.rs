//! Keyboard input handling

use game_core::Key;

/// Map a DOM key string to a game direction (arrow keys plus WASD)
pub fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_same_directions() {
        assert_eq!(map_key("ArrowUp"), Some(Key::Up));
        assert_eq!(map_key("w"), Some(Key::Up));
        assert_eq!(map_key("W"), Some(Key::Up));
        assert_eq!(map_key("ArrowDown"), Some(Key::Down));
        assert_eq!(map_key("s"), Some(Key::Down));
        assert_eq!(map_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(map_key("a"), Some(Key::Left));
        assert_eq!(map_key("ArrowRight"), Some(Key::Right));
        assert_eq!(map_key("D"), Some(Key::Right));
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        assert_eq!(map_key(" "), None);
        assert_eq!(map_key("Enter"), None);
        assert_eq!(map_key("q"), None);
    }
}
