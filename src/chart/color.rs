use anyhow::{Result, anyhow};

/// Default chart palette. Order matters: changing it (or its order) changes
/// every downstream color assignment.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#f97316", // orange
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f59e0b", // amber
    "#6366f1", // indigo
    "#ef4444", // red
    "#0ea5e9", // sky
];

/// Smallest palette accepted at construction.
pub const MIN_PALETTE_SIZE: usize = 8;

/// Assigns each string key a stable color from a fixed palette.
///
/// Two different keys may share a color once distinct keys outnumber the
/// palette; that is expected, not a bug.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<String>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ColorAssigner {
    /// Build an assigner over a custom palette of at least
    /// [`MIN_PALETTE_SIZE`] colors.
    pub fn with_palette(palette: Vec<String>) -> Result<Self> {
        if palette.len() < MIN_PALETTE_SIZE {
            return Err(anyhow!(
                "Palette needs at least {} colors, got {}",
                MIN_PALETTE_SIZE,
                palette.len()
            ));
        }
        Ok(Self { palette })
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Pick the palette color for `key`. Deterministic: the same key always
    /// maps to the same color, independent of any map iteration order.
    ///
    /// The rolling hash is `hash = code + ((hash << 5) - hash)` over the
    /// UTF-16 code units of the key, wrapping as a 32-bit signed integer at
    /// every step. The wrap width is part of the contract: a wider
    /// accumulator would land some keys on different palette indices.
    pub fn color_for(&self, key: &str) -> &str {
        let mut hash: i32 = 0;
        for unit in key.encode_utf16() {
            hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
        }
        // Empty key hashes to 0 and lands on index 0.
        let index = hash.unsigned_abs() as usize % self.palette.len();
        &self.palette[index]
    }
}
