//! Embedded model catalog

use serde::Serialize;

/// A selectable model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    /// Short alias accepted on the command line
    pub short_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "is_false")]
    pub default: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Supported models, in display order. Exactly one entry is the default.
pub const SUPPORTED_MODELS: [ModelInfo; 5] = [
    ModelInfo {
        id: "claude-sonnet-4-20250514",
        short_name: "sonnet-4",
        name: "Claude Sonnet 4",
        description: "Best value, recommended for daily use",
        default: true,
    },
    ModelInfo {
        id: "claude-sonnet-4-5-20250929",
        short_name: "sonnet-4.5",
        name: "Claude Sonnet 4.5",
        description: "Enhanced Sonnet with stronger reasoning",
        default: false,
    },
    ModelInfo {
        id: "claude-haiku-4-5-20251001",
        short_name: "haiku-4.5",
        name: "Claude Haiku 4.5",
        description: "Fast responses for simple tasks",
        default: false,
    },
    ModelInfo {
        id: "claude-opus-4-1-20250805",
        short_name: "opus-4.1",
        name: "Claude Opus 4.1",
        description: "Strong performance for complex tasks",
        default: false,
    },
    ModelInfo {
        id: "claude-opus-4-5-20251101",
        short_name: "opus-4.5",
        name: "Claude Opus 4.5",
        description: "Flagship model, strongest performance",
        default: false,
    },
];

/// The default model
pub fn default_model() -> &'static ModelInfo {
    SUPPORTED_MODELS
        .iter()
        .find(|m| m.default)
        .unwrap_or(&SUPPORTED_MODELS[0])
}

/// Index of the default model in the catalog
pub fn default_index() -> usize {
    SUPPORTED_MODELS.iter().position(|m| m.default).unwrap_or(0)
}

/// Find a model by its full id
pub fn find_by_id(id: &str) -> Option<&'static ModelInfo> {
    SUPPORTED_MODELS.iter().find(|m| m.id == id)
}

/// Index of a model in the catalog
pub fn index_of(id: &str) -> Option<usize> {
    SUPPORTED_MODELS.iter().position(|m| m.id == id)
}

/// Find a model by short alias or full id
pub fn find_by_short_name(name: &str) -> Option<&'static ModelInfo> {
    SUPPORTED_MODELS
        .iter()
        .find(|m| m.short_name == name)
        .or_else(|| find_by_id(name))
}

/// Human-readable catalog listing for `--list-models`
pub fn list_models() -> String {
    let mut out = String::from("Supported models:\n");
    for model in SUPPORTED_MODELS.iter() {
        let marker = if model.default { " (default)" } else { "" };
        out.push_str(&format!("  {}{}\n", model.id, marker));
        out.push_str(&format!(
            "    {} - {} [alias: {}]\n",
            model.name, model.description, model.short_name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_default() {
        assert_eq!(SUPPORTED_MODELS.iter().filter(|m| m.default).count(), 1);
        assert_eq!(default_model().id, "claude-sonnet-4-20250514");
        assert_eq!(default_index(), 0);
    }

    #[test]
    fn test_ids_and_aliases_are_unique() {
        for (i, a) in SUPPORTED_MODELS.iter().enumerate() {
            for b in SUPPORTED_MODELS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.short_name, b.short_name);
            }
        }
    }

    #[test]
    fn test_find_by_short_name_accepts_alias_and_id() {
        assert_eq!(
            find_by_short_name("opus-4.5").map(|m| m.id),
            Some("claude-opus-4-5-20251101")
        );
        assert_eq!(
            find_by_short_name("claude-haiku-4-5-20251001").map(|m| m.name),
            Some("Claude Haiku 4.5")
        );
        assert!(find_by_short_name("gpt-4").is_none());
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("claude-opus-4-1-20250805"), Some(3));
        assert_eq!(index_of("nope"), None);
    }

    #[test]
    fn test_list_models_marks_default_once() {
        let listing = list_models();
        assert_eq!(listing.matches("(default)").count(), 1);
        for model in SUPPORTED_MODELS.iter() {
            assert!(listing.contains(model.id));
            assert!(listing.contains(model.description));
        }
    }
}
