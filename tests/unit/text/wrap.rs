use super::*;

#[test]
fn greedy_wrap_of_short_words() {
    assert_eq!(wrap_words("A B C", 3), vec!["A B", "C"]);
}

#[test]
fn fits_on_one_line() {
    assert_eq!(
        wrap_words("Sleep is a free trial", 48),
        vec!["Sleep is a free trial"]
    );
}

#[test]
fn oversize_word_keeps_its_own_line() {
    assert_eq!(
        wrap_words("a supercalifragilistic b", 5),
        vec!["a", "supercalifragilistic", "b"]
    );
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(
        wrap_words("  one\t two\n\nthree  ", 9),
        vec!["one two", "three"]
    );
}

#[test]
fn empty_and_blank_give_no_lines() {
    assert!(wrap_words("", 10).is_empty());
    assert!(wrap_words(" \n\t ", 10).is_empty());
}

#[test]
fn width_counts_chars_not_bytes() {
    assert_eq!(wrap_words("ééé ééé", 7), vec!["ééé ééé"]);
    assert_eq!(wrap_words("ééé ééé", 6), vec!["ééé", "ééé"]);
}

#[test]
fn zero_width_puts_each_word_alone() {
    assert_eq!(wrap_words("a b", 0), vec!["a", "b"]);
}

#[test]
fn no_line_exceeds_width_unless_single_word() {
    let text = "Your future self is watching you right now through memories \
                and the person you were is gone forever replaced by someone new";
    for width in 1..60 {
        let lines = wrap_words(text, width);
        for line in &lines {
            let len = line.chars().count();
            assert!(len <= width || !line.contains(' '), "{width}: {line:?}");
        }
        let rejoined = lines.join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), original);
    }
}
