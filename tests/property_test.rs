use luna::core::dispatch::{batch, tokenizer};
use proptest::prelude::*;

proptest! {
    /// Every fragment the splitter returns came from the input, is trimmed,
    /// and contains no parentheses of its own.
    #[test]
    fn test_split_batches_fragments_are_clean(input in "[a-zA-Z0-9 (),;*=']{0,200}") {
        for fragment in batch::split_batches(&input) {
            prop_assert!(!fragment.is_empty());
            prop_assert_eq!(fragment.trim(), fragment.as_str());
            prop_assert!(!fragment.contains('('));
            prop_assert!(!fragment.contains(')'));
        }
    }

    /// Balanced, non-empty groups come back in order with their content
    /// preserved.
    #[test]
    fn test_split_batches_preserves_group_order(
        groups in prop::collection::vec("[a-zA-Z0-9 ,;*=']{1,40}", 1..6)
    ) {
        let input: String = groups
            .iter()
            .map(|g| format!("({g})"))
            .collect::<Vec<_>>()
            .join(" ");
        let expected: Vec<String> = groups
            .iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        prop_assert_eq!(batch::split_batches(&input), expected);
    }

    /// Input without an opening parenthesis never yields fragments.
    #[test]
    fn test_split_batches_ignores_paren_free_input(input in "[a-zA-Z0-9 ,;*=']{0,100}") {
        prop_assert!(batch::split_batches(&input).is_empty());
    }

    /// Tokenization never produces empty tokens and never loses
    /// non-whitespace content.
    #[test]
    fn test_tokenize_has_no_empty_tokens(line in "[ a-zA-Z0-9:\"',()]{0,120}") {
        let tokens = tokenizer::tokenize(&line);
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(char::is_whitespace));
        }
        let rejoined: String = tokens.concat();
        let stripped: String = line.split_whitespace().collect();
        prop_assert_eq!(rejoined, stripped);
    }

    /// Any quote-free `key:value` token survives parameter extraction intact.
    #[test]
    fn test_extract_params_round_trips_plain_values(
        key in "[a-z]{1,10}",
        value in "[a-zA-Z0-9_./-]{1,30}",
    ) {
        let tokens = vec![format!("{key}:{value}")];
        let params = tokenizer::extract_params(&tokens, 0);
        prop_assert_eq!(params.get(&key), Some(&value));
    }

    /// Unquoting is idempotent.
    #[test]
    fn test_unquote_is_idempotent(value in "\"?[a-zA-Z0-9 ]{0,30}\"?") {
        let once = tokenizer::unquote(&value);
        prop_assert_eq!(tokenizer::unquote(once), once);
    }
}
