use std::fmt;

/// One of the 26 tile symbols `A..=Z`.
///
/// The only constructors are checked, so an out-of-range letter cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;

    pub const A: Letter = Letter(0);

    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then(|| Self(index as u8))
    }

    /// Case-insensitive; anything outside `a..=z` / `A..=Z` is rejected.
    pub fn from_char(ch: char) -> Option<Self> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let upper = ch.to_ascii_uppercase() as u8;
        Some(Self(upper - b'A'))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/letter.rs"]
mod tests;
