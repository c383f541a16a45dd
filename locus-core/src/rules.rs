//! Table-driven keyword classification.
//!
//! A [`RuleSet`] is an ordered list of [`KeywordRule`]s. Each rule tags a
//! match with a value of `T` and a numeric weight, and fires when either a
//! provider type tag is listed in [`KeywordRule::place_types`] or one of its
//! [`KeywordRule::patterns`] appears in the candidate text as a whole-word
//! phrase. Matching is case-insensitive and ignores punctuation, so the
//! pattern `"port"` matches "Chennai Port" but not "Airport Road".
//!
//! # Examples
//! ```
//! use locus_core::{KeywordRule, MatchText, RuleSet};
//!
//! let rules = RuleSet::new(vec![
//!     KeywordRule::new("premium", 1.0).with_patterns(["luxury", "five star"]),
//!     KeywordRule::new("good", 0.5).with_patterns(["plaza"]),
//! ]);
//! let text = MatchText::new(["The Grand Five-Star Hotel"]);
//!
//! let hit = rules.first_match(&text, &[]).map(|rule| rule.tag);
//! assert_eq!(hit, Some("premium"));
//! ```

use serde::{Deserialize, Serialize};

/// Text normalised for word-bounded phrase matching.
///
/// Letters are lower-cased, every run of non-alphanumeric characters becomes
/// one space, and the result is padded with a space at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchText(String);

impl MatchText {
    /// Normalise and join the given fragments.
    #[must_use]
    pub fn new<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut normalised = String::from(" ");
        for part in parts {
            push_normalised(&mut normalised, part);
        }
        Self(normalised)
    }

    /// Return `true` when `phrase` occurs as a whole-word phrase.
    ///
    /// Blank phrases never match.
    #[must_use]
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let needle = Self::new([phrase]);
        if needle.is_blank() {
            return false;
        }
        self.0.contains(needle.0.as_str())
    }

    /// Return `true` when no alphanumeric content was supplied.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Borrow the normalised form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_normalised(buffer: &mut String, text: &str) {
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            buffer.push(ch);
        } else if !buffer.ends_with(' ') {
            buffer.push(' ');
        }
    }
    if !buffer.ends_with(' ') {
        buffer.push(' ');
    }
}

/// One classification rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule<T> {
    /// Value reported when the rule fires.
    pub tag: T,
    /// Phrases matched against normalised name and vicinity text.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Provider type tags that fire the rule outright.
    #[serde(default)]
    pub place_types: Vec<String>,
    /// Rule-specific weight, such as a feature value or bonus.
    #[serde(default)]
    pub weight: f64,
}

impl<T> KeywordRule<T> {
    /// Create a rule with no patterns or type tags.
    #[must_use]
    pub const fn new(tag: T, weight: f64) -> Self {
        Self {
            tag,
            patterns: Vec::new(),
            place_types: Vec::new(),
            weight,
        }
    }

    /// Add text patterns.
    #[must_use]
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add provider type tags.
    #[must_use]
    pub fn with_place_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.place_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Return `true` when the rule fires for `text` or any of `types`.
    #[must_use]
    pub fn matches(&self, text: &MatchText, types: &[String]) -> bool {
        self.matches_types(types) || self.matches_text(text)
    }

    /// Return `true` when any pattern occurs in `text`.
    #[must_use]
    pub fn matches_text(&self, text: &MatchText) -> bool {
        self.patterns
            .iter()
            .any(|pattern| text.contains_phrase(pattern))
    }

    fn matches_types(&self, types: &[String]) -> bool {
        self.place_types
            .iter()
            .any(|wanted| types.iter().any(|tag| tag == wanted))
    }
}

/// Ordered list of keyword rules. Earlier rules take priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    /// Build a rule set from rules in priority order.
    #[must_use]
    pub const fn new(rules: Vec<KeywordRule<T>>) -> Self {
        Self { rules }
    }

    /// The first rule that fires, if any.
    #[must_use]
    pub fn first_match(&self, text: &MatchText, types: &[String]) -> Option<&KeywordRule<T>> {
        self.rules.iter().find(|rule| rule.matches(text, types))
    }

    /// Every rule that fires, in priority order.
    #[must_use]
    pub fn matches<'a>(
        &'a self,
        text: &'a MatchText,
        types: &'a [String],
    ) -> impl Iterator<Item = &'a KeywordRule<T>> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.matches(text, types))
    }

    /// Iterate over the rules.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule<T>> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` when the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: PartialEq> RuleSet<T> {
    /// Return `true` when any rule tagged `tag` fires.
    #[must_use]
    pub fn contains(&self, tag: &T, text: &MatchText, types: &[String]) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.tag == *tag && rule.matches(text, types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chennai Port Trust", "port", true)]
    #[case("Airport Road", "port", false)]
    #[case("Sports Complex", "port", false)]
    #[case("Five-Star  RESORT", "five star", true)]
    #[case("Metro City", "metro city", true)]
    #[case("Township Plaza", "town", false)]
    #[case("Anything", "   ", false)]
    fn phrases_match_on_word_boundaries(
        #[case] text: &str,
        #[case] phrase: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(MatchText::new([text]).contains_phrase(phrase), expected);
    }

    #[rstest]
    fn fragments_do_not_merge_words() {
        let text = MatchText::new(["Tech", "Park Lane"]);
        assert!(text.contains_phrase("tech park"));
        assert_eq!(text.as_str(), " tech park lane ");
    }

    #[rstest]
    fn type_tags_fire_rules() {
        let rule = KeywordRule::new('m', 50.0).with_place_types(["subway_station"]);
        let types = vec!["transit_station".to_owned(), "subway_station".to_owned()];
        assert!(rule.matches(&MatchText::new(["Blue Line"]), &types));
    }

    #[rstest]
    fn first_match_respects_order() {
        let rules = RuleSet::new(vec![
            KeywordRule::new(1, 0.0).with_patterns(["metro"]),
            KeywordRule::new(2, 0.0).with_patterns(["city"]),
        ]);
        let text = MatchText::new(["Metro city"]);
        assert_eq!(rules.first_match(&text, &[]).map(|rule| rule.tag), Some(1));
        assert_eq!(rules.matches(&text, &[]).count(), 2);
        assert!(rules.contains(&2, &text, &[]));
    }

    #[rstest]
    fn rule_sets_deserialise_from_json_arrays() {
        let json = r#"[{"tag":"a","patterns":["x"],"weight":2.0},{"tag":"b"}]"#;
        let rules: RuleSet<String> = serde_json::from_str(json).expect("rules json");
        assert_eq!(rules.len(), 2);
        assert!(!rules.is_empty());
    }
}
