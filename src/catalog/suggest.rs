//! Emoji recommendations per commit type.

use crate::catalog::{CommitType, Emoji};

/// Emoji codes recommended for each commit type, best match first.
fn suggested_codes(type_code: &str) -> &'static [&'static str] {
    match type_code {
        "feat" => &["sparkles", "rocket", "tada"],
        "fix" => &["bug", "ambulance", "adhesive_bandage", "goal_net"],
        "docs" => &["memo", "bulb", "pencil2"],
        "style" => &["art", "lipstick"],
        "refactor" => &["recycle", "hammer", "truck"],
        "perf" => &["zap", "chart_with_upwards_trend"],
        "test" => &["white_check_mark", "test_tube"],
        "build" => &["package", "construction_worker"],
        "ci" => &["green_heart", "construction"],
        "chore" => &["wrench", "bricks"],
        "revert" => &["rewind", "coffin"],
        _ => &[],
    }
}

/// Pick the recommended emoji for `commit_type` out of `catalog`, in recommendation order.
///
/// Unknown type codes, and codes the catalog doesn't carry, contribute nothing.
pub fn suggest_emojis(commit_type: &CommitType, catalog: &[Emoji]) -> Vec<Emoji> {
    suggested_codes(commit_type.code)
        .iter()
        .filter_map(|code| catalog.iter().find(|e| e.code == *code).copied())
        .collect()
}

/// Menu order for the emoji picker: suggestions first, then the rest of the catalog.
pub fn emoji_display_order(suggestions: &[Emoji], catalog: &[Emoji]) -> Vec<Emoji> {
    let mut ordered = suggestions.to_vec();
    ordered.extend(
        catalog
            .iter()
            .filter(|e| !suggestions.iter().any(|s| s.code == e.code))
            .copied(),
    );
    ordered
}
