/// Splits a sentence into whitespace delimited tokens.
///
/// Tokens are returned exactly as they appear: "Excellent", "excellent" and
/// "excellent." are three different words to the classifier.
pub fn tokenize(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens: Vec<_> = tokenize("The  food\twas\ngreat").collect();
        assert_eq!(tokens, vec!["The", "food", "was", "great"]);
    }

    #[test]
    fn keeps_case_and_punctuation() {
        let tokens: Vec<_> = tokenize("Excellent excellent excellent.").collect();
        assert_eq!(tokens, vec!["Excellent", "excellent", "excellent."]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  \t \n").count(), 0);
    }

    #[test]
    fn repeated_words_are_kept() {
        let tokens: Vec<_> = tokenize("so so good").collect();
        assert_eq!(tokens, vec!["so", "so", "good"]);
    }
}
