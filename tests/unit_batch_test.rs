use luna::core::dispatch::batch::split_batches;

#[test]
fn test_split_two_fragments_in_order() {
    let fragments = split_batches("luna multiple (select-from users) (select-from orders)");
    assert_eq!(fragments, vec!["select-from users", "select-from orders"]);
}

#[test]
fn test_split_trims_fragments() {
    let fragments = split_batches("luna multiple (  drop-table t  )");
    assert_eq!(fragments, vec!["drop-table t"]);
}

#[test]
fn test_split_discards_empty_matches() {
    let fragments = split_batches("luna multiple () (   ) (commit)");
    assert_eq!(fragments, vec!["commit"]);
}

#[test]
fn test_split_no_parentheses() {
    assert!(split_batches("luna multiple nothing here").is_empty());
}

#[test]
fn test_split_unbalanced_open_is_dropped() {
    let fragments = split_batches("(select-from a) (select-from b");
    assert_eq!(fragments, vec!["select-from a"]);
}

#[test]
fn test_split_does_not_nest() {
    // Leftmost-to-rightmost scan: the first `)` closes the first `(`.
    let fragments = split_batches("(a (b) c)");
    assert_eq!(fragments, vec!["a (b"]);
}

#[test]
fn test_split_many_fragments_preserve_order() {
    let fragments = split_batches("(one)(two)(three)(four)");
    assert_eq!(fragments, vec!["one", "two", "three", "four"]);
}
