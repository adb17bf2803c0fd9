use std::collections::BTreeMap;
use std::fmt;

/// Text transforms that can be applied to free text. Every variant is total:
/// any input, including the empty string, produces an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum TextFilter {
    #[default]
    Identity,
    Lower,
    CountChars,
    CountLines,
    Alphabetical,
    CountPerWord,
}

impl TextFilter {
    /// Menu order.
    pub const ALL: [TextFilter; 6] = [
        TextFilter::Identity,
        TextFilter::Lower,
        TextFilter::CountChars,
        TextFilter::CountLines,
        TextFilter::Alphabetical,
        TextFilter::CountPerWord,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextFilter::Identity => "No modifications",
            TextFilter::Lower => "To lower",
            TextFilter::CountChars => "Count chars",
            TextFilter::CountLines => "Count nr. of lines",
            TextFilter::Alphabetical => "Words in alphabetical order",
            TextFilter::CountPerWord => "Count per word",
        }
    }

    pub fn translate(&self, text: &str) -> String {
        match self {
            TextFilter::Identity => text.to_string(),
            TextFilter::Lower => text.to_lowercase(),
            TextFilter::CountChars => text.chars().count().to_string(),
            TextFilter::CountLines => text.lines().count().to_string(),
            TextFilter::Alphabetical => {
                let mut words: Vec<&str> = text.split_whitespace().collect();
                words.sort_unstable();
                words.join(" ")
            }
            TextFilter::CountPerWord => word_frequencies(text)
                .iter()
                .map(|(word, count)| format!("{} -> {}", word, count))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occurrences of each whitespace-separated word, keyed by word.
pub fn word_frequencies(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word.to_string()).or_default() += 1;
    }
    counts
}
