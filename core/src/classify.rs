/// Case-insensitive keyword test over page markup.
///
/// Keywords are lower-cased once; the classifier is immutable after
/// construction and shared read-only by every pool unit.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    /// Blank keywords are dropped: an empty needle would match every page.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .filter(|k| !k.as_ref().trim().is_empty())
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, content: &str) -> bool {
        if content.is_empty() || self.keywords.is_empty() {
            return false;
        }
        let haystack = content.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

/// One-shot form of [`KeywordClassifier::matches`].
pub fn matches<S: AsRef<str>>(content: &str, keywords: &[S]) -> bool {
    KeywordClassifier::new(keywords).matches(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(matches("<html>KEYWORD1 present</html>", &["keyword1"]));
        assert!(matches("<p>keyword2</p>", &["KeyWord2"]));
    }

    #[test]
    fn test_no_keyword_present() {
        assert!(!matches("nothing here", &["keyword1", "keyword2"]));
    }

    #[test]
    fn test_empty_content_never_matches() {
        assert!(!matches("", &["keyword1"]));
        assert!(!matches::<&str>("", &[]));
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let classifier = KeywordClassifier::new(["", "   ", "Needle"]);
        assert_eq!(classifier.keywords(), &["needle".to_string()]);
        assert!(!classifier.matches("haystack"));
        assert!(classifier.matches("a NEEDLE in a haystack"));
    }

    #[test]
    fn test_surrounding_spaces_are_kept() {
        let classifier = KeywordClassifier::new([" ad "]);
        assert_eq!(classifier.keywords(), &[" ad ".to_string()]);
        assert!(!classifier.matches("<p>loading ads</p>"));
        assert!(classifier.matches("<p>an AD here</p>"));
    }

    #[test]
    fn test_non_ascii_keywords() {
        let classifier = KeywordClassifier::new(["关键词1", "Straße"]);
        assert!(classifier.matches("<title>包含关键词1的页面</title>"));
        assert!(classifier.matches("STRASSE oder straße"));
        assert!(!classifier.matches("关键词2"));
    }

    #[test]
    fn test_keyword_in_attribute_matches() {
        let classifier = KeywordClassifier::new(["promo"]);
        assert!(classifier.matches(r#"<div class="PROMO-banner"></div>"#));
    }
}
