use super::*;

// ========== TermTokenizer ==========

#[test]
fn test_term_tokenizer_lowercases() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("Action Adventure"),
        vec!["action", "adventure"]
    );
}

#[test]
fn test_term_tokenizer_splits_on_punctuation() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("action,adventure|sci-fi"),
        vec!["action", "adventure", "sci", "fi"]
    );
}

#[test]
fn test_term_tokenizer_drops_empty_tokens_between_separators() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("drama -- ,, romance"),
        vec!["drama", "romance"]
    );
}

#[test]
fn test_term_tokenizer_separator_only_input_is_empty() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(tokenizer.tokenize("|| -- ,, !!"), Vec::<String>::new());
}

#[test]
fn test_term_tokenizer_empty_input_is_empty() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(tokenizer.tokenize(""), Vec::<String>::new());
}

#[test]
fn test_term_tokenizer_keeps_digits() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("Blade Runner 2049"),
        vec!["blade", "runner", "2049"]
    );
}

#[test]
fn test_term_tokenizer_keeps_single_characters() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(tokenizer.tokenize("b movie"), vec!["b", "movie"]);
}

#[test]
fn test_term_tokenizer_splits_on_underscore() {
    // Underscore is not alphanumeric, so it separates terms.
    let tokenizer = TermTokenizer::new();
    assert_eq!(tokenizer.tokenize("sci_fi"), vec!["sci", "fi"]);
}

#[test]
fn test_term_tokenizer_keeps_accented_letters() {
    let tokenizer = TermTokenizer::new();
    assert_eq!(tokenizer.tokenize("Amélie Négra"), vec!["amélie", "négra"]);
}

// ========== WhitespaceTokenizer ==========

#[test]
fn test_whitespace_tokenizer_splits_on_spaces_only() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("action sci-fi thriller"),
        vec!["action", "sci-fi", "thriller"]
    );
}

#[test]
fn test_whitespace_tokenizer_preserves_case() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(tokenizer.tokenize("Action Drama"), vec!["Action", "Drama"]);
}

#[test]
fn test_whitespace_tokenizer_collapses_runs() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("  drama \t romance \n"),
        vec!["drama", "romance"]
    );
}
