use rand::seq::SliceRandom;

/// Number of words drawn for a standard session
pub const DEFAULT_WORD_COUNT: usize = 50;

/// Common English words bucketed by length, 3 through 8 characters
const CORPUS: [&[&str]; 6] = [
    &[
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
        "one", "our", "out", "day", "get", "has", "him",
    ],
    &[
        "that", "with", "have", "this", "will", "your", "from", "they", "know", "want", "been",
        "good", "much", "some", "time", "very", "when", "come", "just", "into",
    ],
    &[
        "about", "there", "think", "would", "could", "every", "other", "first", "their", "these",
        "words", "which", "water", "write", "place", "sound", "great", "where", "right", "after",
    ],
    &[
        "should", "before", "little", "change", "around", "always", "people", "system", "number",
        "family", "second", "enough", "moment", "though", "person", "better", "really", "almost",
        "listen", "friend",
    ],
    &[
        "another", "thought", "example", "picture", "science", "measure", "product", "history",
        "because", "company", "quality", "service", "support", "network", "project", "process",
        "control", "current", "program", "problem",
    ],
    &[
        "language", "computer", "business", "research", "industry", "security", "software",
        "hardware", "database", "internet", "analysis", "solution", "strategy", "resource",
        "practice", "evidence", "approach", "function", "complete", "standard",
    ],
];

/// Every word in the corpus, shortest bucket first
pub fn corpus() -> impl Iterator<Item = &'static str> {
    CORPUS.iter().flat_map(|bucket| bucket.iter().copied())
}

pub fn corpus_size() -> usize {
    CORPUS.iter().map(|bucket| bucket.len()).sum()
}

/// Draw `count` distinct words in random order.
///
/// Shuffles the whole corpus and truncates, so asking for more words than
/// the corpus holds returns the full corpus rather than failing.
pub fn words(count: usize) -> Vec<String> {
    let mut all: Vec<&str> = corpus().collect();
    all.shuffle(&mut rand::thread_rng());
    all.into_iter().take(count).map(str::to_owned).collect()
}

pub fn default_words() -> Vec<String> {
    words(DEFAULT_WORD_COUNT)
}

/// Supplies target words whenever a session is (re)started
pub trait WordSource {
    fn words(&self, count: usize) -> Vec<String>;
}

/// Random draws from the built-in corpus
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusWords;

impl WordSource for CorpusWords {
    fn words(&self, count: usize) -> Vec<String> {
        words(count)
    }
}

/// A predetermined word list, handed out in order
#[derive(Debug, Clone, Default)]
pub struct FixedWords {
    words: Vec<String>,
}

impl FixedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for FixedWords {
    fn words(&self, count: usize) -> Vec<String> {
        self.words.iter().take(count).cloned().collect()
    }
}
