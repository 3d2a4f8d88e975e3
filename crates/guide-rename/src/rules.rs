//! Replacement rules for the brand migration

/// An ordered literal replacement pair
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

/// The brand-migration table. Rules are applied in order and may overlap;
/// earlier rules see the original text, later rules see the output of the
/// ones before them.
pub const BRAND_RULES: &[Rule] = &[
    Rule { from: "清迈内行", to: "清迈指南" },
    Rule { from: "清迈小助手", to: "清迈指南" },
    Rule { from: "CM Insider", to: "Chiang Mai Guide" },
    Rule { from: "CMInsider", to: "ChiangMaiGuide" },
    // package name
    Rule { from: "cm-insider", to: "chiangmai-guide" },
];

/// Apply every rule in order and return the rewritten content together
/// with the number of matched occurrences.
///
/// The occurrence count is computed against the pre-replacement content,
/// summed across all rules. When rules overlap this can differ from the
/// number of substitutions actually performed; the count is a progress
/// indicator, not an audit trail.
pub fn apply_rules(content: &str, rules: &[Rule]) -> (String, usize) {
    let occurrences: usize = rules
        .iter()
        .map(|rule| content.matches(rule.from).count())
        .sum();

    let mut rewritten = content.to_string();
    for rule in rules {
        if rewritten.contains(rule.from) {
            rewritten = rewritten.replace(rule.from, rule.to);
        }
    }

    (rewritten, occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[Rule] = &[
        Rule { from: "old-name", to: "new-name" },
        Rule { from: "OldName", to: "NewName" },
    ];

    #[test]
    fn test_apply_rules_rewrites_all_occurrences() {
        let (out, count) = apply_rules("old-name and OldName and old-name", RULES);
        assert_eq!(out, "new-name and NewName and new-name");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_apply_rules_no_match() {
        let (out, count) = apply_rules("nothing to do here", RULES);
        assert_eq!(out, "nothing to do here");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_apply_rules_idempotent() {
        let (once, _) = apply_rules("old-name twice old-name", RULES);
        let (twice, count) = apply_rules(&once, RULES);
        assert_eq!(once, twice);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_occurrence_count_uses_pre_replacement_content() {
        // The count is taken from the original text across all rules, not
        // from what each rule actually replaced after earlier rules ran.
        // An overlapping rule chain therefore over-reports: "a" -> "b"
        // turns every "a" into "b" before "b" -> "c" runs, yet both rules
        // count against the original. This mirrors the historical behavior
        // of the script and is deliberate.
        let rules = &[Rule { from: "a", to: "b" }, Rule { from: "b", to: "c" }];
        let (out, count) = apply_rules("a b", rules);
        assert_eq!(out, "c c");
        assert_eq!(count, 2);
    }
}
