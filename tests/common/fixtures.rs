//! Synthetic corpus with known occurrence counts.
//!
//! Every special line holds exactly one occurrence of its term and the filler
//! lines hold none, so counts are exact in any letter case.

use shakesearch_core::config::SearchConfig;
use shakesearch_core::Searcher;

pub const FLORENCE_COUNT: usize = 32;
pub const DRUNK_COUNT: usize = 27;
pub const HAMLET_COUNT: usize = 9;

/// A term that appears nowhere in [`corpus`].
pub const ABSENT_TERM: &str = "tempest";

const FILLER: &[&str] = &[
    "To be, or not to be, that is the question.\n",
    "Now is the winter of our discontent.\n",
    "All the world's a stage, and all the men and women merely players.\n",
    "The quality of mercy is not strained.\n",
    "Good night, good night! Parting is such sweet sorrow.\n",
];

const FLORENCE_LINES: &[&str] = &[
    "Where is the Duke of Florence tonight?\n",
    "FLORENCE, a city in Tuscany.\n",
    "The florentine ladies speak of florence still.\n",
];

const DRUNK_LINES: &[&str] = &[
    "He is drunk with sack and sugar.\n",
    "Drunk, my lord, as any tapster.\n",
];

const HAMLET_LINES: &[&str] = &["Enter Hamlet, reading.\n", "HAMLET. Words, words, words.\n"];

/// Build the fixture corpus. Deterministic.
pub fn corpus() -> String {
    let mut special: Vec<&str> = Vec::new();
    special.extend(FLORENCE_LINES.iter().cycle().take(FLORENCE_COUNT));
    special.extend(DRUNK_LINES.iter().cycle().take(DRUNK_COUNT));
    special.extend(HAMLET_LINES.iter().cycle().take(HAMLET_COUNT));

    // Interleave the three families so pages mix with filler.
    special.sort_by_key(|line| line.len() % 7);

    let mut text = String::new();
    for (i, line) in special.iter().enumerate() {
        for j in 0..3 {
            text.push_str(FILLER[(i + j) % FILLER.len()]);
        }
        text.push_str(line);
    }
    text.push_str(FILLER[0]);
    text
}

/// A searcher over [`corpus`] with the default settings.
pub fn searcher() -> Searcher {
    Searcher::from_bytes(corpus(), SearchConfig::default()).expect("fixture corpus indexes")
}
