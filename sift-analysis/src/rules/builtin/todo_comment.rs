//! Flags deferred-work markers left in source text.

use aho_corasick::AhoCorasick;
use sift_core::types::span::ByteSpan;

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};

pub struct TodoComment;

static META: RuleMeta = RuleMeta {
    id: "todo-comment",
    category: RuleCategory::Style,
    languages: &[],
    priority: 20,
    autofix: AutofixSafety::None,
};

const DEFAULT_MARKERS: &[&str] = &["TODO", "FIXME", "XXX", "HACK"];

impl Rule for TodoComment {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn requires(&self) -> Requires {
        Requires::RAW_TEXT
    }

    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let Some(text) = ctx.text() else {
            return Vec::new();
        };
        let configured = ctx.config_strings("markers");
        let markers: Vec<&str> = match &configured {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_MARKERS.to_vec(),
        };
        let Ok(searcher) = AhoCorasick::new(&markers) else {
            return Vec::new();
        };

        searcher
            .find_iter(text)
            .map(|hit| {
                let marker = markers[hit.pattern().as_usize()];
                Finding::new(
                    META.id,
                    ctx.file(),
                    ByteSpan::new(hit.start() as u32, hit.end() as u32),
                    format!("{marker} marker left in source"),
                    Severity::Info,
                )
                .with_meta("marker", serde_json::Value::String(marker.to_string()))
            })
            .collect()
    }
}
