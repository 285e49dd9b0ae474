/*!
 * Heuristic punctuation and capitalization repair.
 *
 * The repair pass is an ordered pipeline of independent rewrite rules.
 * Each rule is a local regular-pattern rewrite; later rules rely on the
 * spacing and punctuation state left behind by earlier ones, so the order
 * of `RULES` is part of the contract. None of the rules carries global
 * sentence-structure knowledge and the output is best-effort, not
 * guaranteed grammatical.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Replacement policy of a rewrite rule
enum Rewrite {
    /// Static template expanded with capture groups
    Template(&'static str),
    /// Replacement computed from the captures of each match
    With(fn(&Captures) -> String),
}

/// One named, self-contained rewrite applied during grammar repair
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        RewriteRule {
            name,
            pattern: Regex::new(pattern).unwrap(),
            rewrite,
        }
    }

    /// Name of this rule, stable for rule-by-rule testing
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this single rule to the given text
    pub fn apply(&self, text: &str) -> String {
        match &self.rewrite {
            Rewrite::Template(template) => {
                self.pattern.replace_all(text, *template).into_owned()
            }
            Rewrite::With(compute) => self
                .pattern
                .replace_all(text, |caps: &Captures| compute(caps))
                .into_owned(),
        }
    }
}

static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        // Run-on sentence split: lowercase directly followed by an uppercase word
        RewriteRule::new(
            "sentence_boundary",
            r"([a-z])\s+([A-Z])",
            Rewrite::Template("$1. $2"),
        ),
        // Comma before coordinating conjunctions in compound sentences
        RewriteRule::new(
            "comma_before_conjunction",
            r"(\w+)\s+(and|or|but|nor|for|yet|so)\s+",
            Rewrite::Template("$1, $2 "),
        ),
        // Comma after introductory adverbs and discourse markers
        RewriteRule::new(
            "comma_after_introducer",
            r"(^|\. )(well|now|yes|moreover|furthermore|however|meanwhile|finally|then|today|yesterday|tomorrow|here|there)\s+",
            Rewrite::Template("$1$2, "),
        ),
        // Comma between a word and a following region/country token
        RewriteRule::new(
            "comma_before_region",
            r"([A-Za-z]+)\s+([A-Z]{2}|USA|UK|US|U\.S\.|U\.K\.)",
            Rewrite::Template("$1, $2"),
        ),
        // Comma before an opening quotation mark that follows a word
        RewriteRule::new(
            "comma_before_quote",
            r#"(\w)\s*""#,
            Rewrite::Template("$1, \""),
        ),
        // Oxford comma in a run of three word groups joined by "and".
        // Tolerates a comma the conjunction rule may already have inserted.
        RewriteRule::new(
            "oxford_comma",
            r"(\w+),?\s+(\w+),?\s+and\s+(\w+)",
            Rewrite::Template("$1, $2, and $3"),
        ),
        // Comma separating the clauses of a subordinating conjunction
        RewriteRule::new(
            "comma_after_subordinate_clause",
            r"(because|although|though|unless|when|if|while)\s+([^,]+?)\s+([^,]+?[.!?])",
            Rewrite::Template("$1 $2, $3"),
        ),
        // No whitespace before closing punctuation
        RewriteRule::new(
            "strip_space_before_punctuation",
            r"\s+([.,!?])",
            Rewrite::Template("$1"),
        ),
        // Exactly one space after punctuation unless a quote or whitespace follows
        RewriteRule::new(
            "space_after_punctuation",
            r#"([.,!?])([^\s"])"#,
            Rewrite::Template("$1 $2"),
        ),
        // Capitalize the first letter of every sentence
        RewriteRule::new(
            "capitalize_sentence_start",
            r"(^|\. )([a-z])",
            Rewrite::With(|caps| format!("{}{}", &caps[1], caps[2].to_uppercase())),
        ),
    ]
});

/// The full ordered rule pipeline, exposed for rule-by-rule testing
pub fn rules() -> &'static [RewriteRule] {
    &RULES
}

/// Repair punctuation and capitalization of the given text.
///
/// Applies every rewrite rule in order, feeding each rule the output of
/// the previous one. Pure and deterministic.
pub fn repair(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
