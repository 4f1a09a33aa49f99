//! High score persistence
//!
//! A single integer under one LocalStorage key, read once at startup and
//! written whenever it is beaten.

/// Best floored score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dinoHighScore";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a final score. Returns true if it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Parse a stored value. Accepts integers and legacy fractional numbers.
    pub fn parse(raw: &str) -> Option<u32> {
        let value: f64 = serde_json::from_str(raw.trim()).ok()?;
        if value.is_finite() && value >= 0.0 {
            Some(value.floor() as u32)
        } else {
            None
        }
    }

    /// Load the high score from LocalStorage (WASM only). Missing or unreadable means 0.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(best) = Self::parse(&raw) {
                    log::info!("Loaded high score {}", best);
                    return Self::new(best);
                }
                log::warn!("Ignoring unreadable high score {:?}", raw);
            }
        } else {
            log::warn!("LocalStorage unavailable; high score will not persist");
        }

        log::info!("No high score found, starting fresh");
        Self::default()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(raw) = serde_json::to_string(&self.best) {
                match storage.set_item(Self::STORAGE_KEY, &raw) {
                    Ok(()) => log::info!("High score saved ({})", self.best),
                    Err(e) => log::warn!("High score not saved: {:?}", e),
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_raises() {
        let mut hs = HighScore::new(40);
        assert!(hs.record(55));
        assert_eq!(hs.best(), 55);
        assert!(!hs.record(30));
        assert!(!hs.record(55));
        assert_eq!(hs.best(), 55);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(HighScore::parse("55"), Some(55));
        assert_eq!(HighScore::parse(" 120\n"), Some(120));
        assert_eq!(HighScore::parse("55.7"), Some(55));
        assert_eq!(HighScore::parse("-3"), None);
        assert_eq!(HighScore::parse("abc"), None);
        assert_eq!(HighScore::parse(""), None);
    }

    #[test]
    fn test_stored_format_round_trips() {
        let raw = serde_json::to_string(&HighScore::new(1234).best()).unwrap();
        assert_eq!(raw, "1234");
        assert_eq!(HighScore::parse(&raw), Some(1234));
    }

    #[test]
    fn test_native_load_defaults_to_zero() {
        assert_eq!(HighScore::load().best(), 0);
    }
}
