
// most common first
pub const FREQUENCY_ORDER: [u8; 26] = *b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

pub struct Scorer {
    pub non_letter_penalty: i64,
    pub non_printable_penalty: i64,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer {
            non_letter_penalty: 40,
            non_printable_penalty: 1000,
        }
    }
}

impl Scorer {
    // lower means more english-like
    pub fn score(&self, data: &[u8]) -> i64 {
        String::from_utf8_lossy(data)
            .chars()
            .map(|c| self.score_char(c))
            .sum()
    }

    fn score_char(&self, c: char) -> i64 {
        if let Some(rank) = letter_rank(c) {
            return rank;
        }
        if c.is_ascii_graphic() || c.is_ascii_whitespace() {
            return self.non_letter_penalty;
        }

        self.non_printable_penalty
    }
}

fn letter_rank(c: char) -> Option<i64> {
    if !c.is_ascii_alphabetic() {
        return None;
    }

    let upper = c.to_ascii_uppercase() as u8;
    FREQUENCY_ORDER
        .iter()
        .position(|&f| f == upper)
        .map(|rank| rank as i64)
}

pub fn score(data: &[u8]) -> i64 {
    Scorer::default().score(data)
}
