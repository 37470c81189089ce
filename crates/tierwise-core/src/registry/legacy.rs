//! Legacy pricing keys
//!
//! Some callers still look prices up under older spellings of a model id.
//! Each rule below recognizes a canonical id by prefix and derives at most
//! one extra pricing key from it. Rules are checked in order and the first
//! rule whose prefix matches decides, even when it derives nothing.

/// How a matched canonical id becomes a legacy key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyTransform {
    /// Drop this leading segment from the id
    StripPrefix(&'static str),
    /// Swap the rule's prefix for another one, keeping the suffix
    ReplacePrefix(&'static str),
    /// Emit a fixed key, but only for ids containing `marker`
    FixedKey {
        marker: &'static str,
        key: &'static str,
    },
}

/// One `(prefix, transform)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyRule {
    pub prefix: &'static str,
    pub transform: LegacyTransform,
}

/// Legacy-key rules, first match wins
pub const LEGACY_RULES: &[LegacyRule] = &[
    LegacyRule {
        prefix: "openrouter/deepseek/",
        transform: LegacyTransform::StripPrefix("openrouter/"),
    },
    LegacyRule {
        prefix: "openrouter/qwen/",
        transform: LegacyTransform::StripPrefix("openrouter/"),
    },
    LegacyRule {
        prefix: "gemini/",
        transform: LegacyTransform::StripPrefix("gemini/"),
    },
    LegacyRule {
        prefix: "anthropic/",
        transform: LegacyTransform::FixedKey {
            marker: "claude-sonnet-4-20250514",
            key: "anthropic/claude-sonnet-4",
        },
    },
    LegacyRule {
        prefix: "xai/",
        transform: LegacyTransform::ReplacePrefix("openrouter/x-ai/"),
    },
];

impl LegacyRule {
    /// Whether this rule claims the id
    pub fn matches(&self, canonical_id: &str) -> bool {
        canonical_id.starts_with(self.prefix)
    }

    /// Derive the legacy key; `None` when the rule matches but yields nothing
    pub fn apply(&self, canonical_id: &str) -> Option<String> {
        let key = match self.transform {
            LegacyTransform::StripPrefix(segment) => canonical_id.strip_prefix(segment)?.to_string(),
            LegacyTransform::ReplacePrefix(replacement) => {
                let suffix = canonical_id.strip_prefix(self.prefix)?;
                format!("{}{}", replacement, suffix)
            }
            LegacyTransform::FixedKey { marker, key } => {
                if !canonical_id.contains(marker) {
                    return None;
                }
                key.to_string()
            }
        };

        (!key.is_empty()).then_some(key)
    }
}

/// Legacy pricing key for a canonical id under [`LEGACY_RULES`]
pub fn legacy_key_for(canonical_id: &str) -> Option<String> {
    LEGACY_RULES
        .iter()
        .find(|rule| rule.matches(canonical_id))
        .and_then(|rule| rule.apply(canonical_id))
}
