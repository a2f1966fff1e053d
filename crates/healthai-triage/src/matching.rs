//! Text matching helpers shared by both classifiers. Inputs are expected
//! to be normalized (trimmed, lowercased) already.

/// `keyword` appears anywhere inside `symptom`.
pub fn keyword_in(symptom: &str, keyword: &str) -> bool {
    symptom.contains(keyword)
}

/// `needle` occurs in `haystack` as a run of whole words.
///
/// `"breathing"` is a word run of `"difficulty breathing"`; `"ache"` is not
/// a word run of `"headache"`.
pub fn is_word_run(needle: &str, haystack: &str) -> bool {
    let needle: Vec<&str> = needle.split_whitespace().collect();
    let haystack: Vec<&str> = haystack.split_whitespace().collect();
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
}

/// Append `item` unless an equal entry is already present.
pub fn push_unique(out: &mut Vec<String>, item: &str) {
    if !out.iter().any(|existing| existing == item) {
        out.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_containment() {
        assert!(keyword_in("sudden chest pain", "chest pain"));
        assert!(!keyword_in("chest", "chest pain"));
    }

    #[test]
    fn word_runs_respect_boundaries() {
        assert!(is_word_run("breathing", "difficulty breathing"));
        assert!(is_word_run("chest pain", "chest pain"));
        assert!(!is_word_run("ache", "headache"));
        assert!(!is_word_run("pain chest", "chest pain"));
        assert!(!is_word_run("", "fever"));
        assert!(!is_word_run("very high fever", "high fever"));
    }

    #[test]
    fn push_unique_keeps_first_occurrence_order() {
        let mut out = vec!["a".to_string()];
        push_unique(&mut out, "b");
        push_unique(&mut out, "a");
        push_unique(&mut out, "c");
        assert_eq!(out, ["a", "b", "c"]);
    }
}
