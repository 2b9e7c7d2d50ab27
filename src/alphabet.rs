use std::{borrow::Cow, fmt};

/// Ordered digit glyphs. The glyph at `index` renders digit value `index` in standard mode and `index + 1` in
/// bijective mode.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Alphabet {
    glyphs: Cow<'static, [char]>,
}

impl Alphabet {
    pub const fn from_static(glyphs: &'static [char]) -> Self {
        Self {
            glyphs: Cow::Borrowed(glyphs),
        }
    }

    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }

    pub fn as_slice(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl AsRef<[char]> for Alphabet {
    fn as_ref(&self) -> &[char] {
        &self.glyphs
    }
}

impl From<&str> for Alphabet {
    fn from(glyphs: &str) -> Self {
        Self {
            glyphs: Cow::Owned(glyphs.chars().collect()),
        }
    }
}

impl From<String> for Alphabet {
    fn from(glyphs: String) -> Self {
        Self::from(glyphs.as_str())
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(glyphs: Vec<char>) -> Self {
        Self {
            glyphs: Cow::Owned(glyphs),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.glyphs.iter() {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}
