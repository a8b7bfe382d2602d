use std::collections::HashSet;
use wordcloud::frequency::MIN_WORD_LEN;
use wordcloud::normalize::tokenize;
use wordcloud::{stopwords, word_frequencies};

const MIXED_TEXT: &str = "\
Анализ текста важен для обработки естественного языка. Он и она, мы и вы!
Python 3.12 (and Rust 1.80) — both parse TEXT; text, text... A to-do list: a, an, at.
Машинное обучение и искусственный интеллект развиваются быстро: 2024-2025.";

#[test]
fn test_scenario_case_folding() {
    let freq = word_frequencies("Python python PYTHON", stopwords::builtin());
    assert_eq!(freq.iter().collect::<Vec<_>>(), vec![("python", 3)]);
}

#[test]
fn test_scenario_only_stopwords() {
    let freq = word_frequencies("и он в а", stopwords::builtin());
    assert!(freq.is_empty());
}

#[test]
fn test_scenario_short_tokens_without_stopwords() {
    let freq = word_frequencies("a an at cat dog dog", &HashSet::<&str>::new());
    assert_eq!(freq.iter().collect::<Vec<_>>(), vec![("dog", 2), ("cat", 1)]);
}

#[test]
fn test_filtered_words_never_counted() {
    let stop = stopwords::builtin();
    let freq = word_frequencies(MIXED_TEXT, stop);
    assert!(!freq.is_empty());
    for (word, _) in freq.iter() {
        assert!(!stop.contains(word), "{word} is a stop-word");
        assert!(word.chars().count() >= MIN_WORD_LEN, "{word} is too short");
    }
}

#[test]
fn test_counts_sum_to_surviving_tokens() {
    let stop = stopwords::builtin();
    let freq = word_frequencies(MIXED_TEXT, stop);
    let surviving = tokenize(MIXED_TEXT)
        .into_iter()
        .filter(|t| t.chars().count() >= MIN_WORD_LEN && !stop.contains(t.as_str()))
        .count();
    assert_eq!(freq.total(), surviving);
    assert_eq!(freq.get("text"), Some(3));
}

#[test]
fn test_order_non_increasing() {
    let freq = word_frequencies(MIXED_TEXT, stopwords::builtin());
    let counts: Vec<usize> = freq.iter().map(|(_, c)| c).collect();
    for pair in counts.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert_eq!(freq.top(1), vec![("text", 3)]);
}

#[test]
fn test_tokens_are_lowercase_word_characters() {
    for token in tokenize(MIXED_TEXT) {
        assert!(token.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()), "{token}");
    }
}

#[test]
fn test_idempotent() {
    let a = word_frequencies(MIXED_TEXT, stopwords::builtin());
    let b = word_frequencies(MIXED_TEXT, stopwords::builtin());
    assert_eq!(a, b);
    assert_eq!(
        a.iter().collect::<Vec<_>>(),
        b.iter().collect::<Vec<_>>()
    );
}
