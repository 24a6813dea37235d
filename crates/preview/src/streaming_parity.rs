//! Streaming parity tests: feeding a session chunk-by-chunk must match a
//! fresh completion of the accumulated text at every boundary, and the view
//! after `finish()` must be the raw input.
//!
//! Fast CI mode: default seeds and budget when `CI` is set.
//! Extended local mode: set `TAGMEND_STREAMING_PARITY_SEEDS` and
//! `TAGMEND_STREAMING_PARITY_BUDGET` to increase coverage.

use crate::PreviewSession;
use crate::chunker::build_chunk_plans;

const DEFAULT_BUDGET_CI: usize = 200;
const DEFAULT_BUDGET_LOCAL: usize = 1_000;
const DEFAULT_SEEDS_CI: usize = 25;
const DEFAULT_SEEDS_LOCAL: usize = 100;

#[test]
fn streaming_parity_session_matches_fresh_completion() {
    let cases = [
        "<div><span>hi",
        "<a><b><c>",
        "</div>",
        "plain text with 1 < 2 in it",
        "<div>text<br/>more",
        "<Card title=\"Streaming\" compact><Badge>",
        "<img src=\"a>b\"/>more",
        "é<b>café 😀",
        "<ul><li>one</li><li>two",
        "<section><arti",
    ];
    let seeds = seed_count();
    let budget = run_budget();

    let case_budget = (budget / cases.len()).max(1);
    for (case_idx, input) in cases.iter().enumerate() {
        let mut runs_case = 0usize;
        let seed = 0x7461676d656e64 ^ case_idx as u64;
        for case in build_chunk_plans(input, seeds, seed) {
            if runs_case >= case_budget {
                break;
            }
            assert_parity(input, &case.label, || {
                let mut chunks = Vec::new();
                case.plan.for_each_chunk(input, |chunk| chunks.push(chunk.to_string()));
                chunks
            });
            runs_case += 1;
        }
        assert!(
            runs_case > 0,
            "streaming parity case {case_idx} produced no runs; check budget or inputs"
        );
    }
}

#[test]
fn streaming_parity_holds_for_every_prefix_split() {
    // Exhaustive two-chunk split of a small but adversarial input.
    let input = "é<div title=\"a>b\"><br/><sp";
    for split in 1..input.len() {
        if !input.is_char_boundary(split) {
            continue;
        }
        assert_parity(input, &format!("prefix split={split}"), || {
            vec![input[..split].to_string(), input[split..].to_string()]
        });
    }
}

fn assert_parity(input: &str, label: &str, chunks: impl FnOnce() -> Vec<String>) {
    let mut session = PreviewSession::new();
    let mut accumulated = String::new();
    for chunk in chunks() {
        session.push_str(&chunk);
        accumulated.push_str(&chunk);
        let expected = markup::complete(&accumulated);
        assert_eq!(
            session.renderable(),
            expected,
            "parity mismatch for input {input:?} plan {label} after {} bytes",
            accumulated.len()
        );
    }
    assert_eq!(
        session.source(),
        input,
        "session must accumulate the full input for plan {label}"
    );
    session.finish();
    assert_eq!(
        session.renderable(),
        input,
        "after finish the raw source is rendered for plan {label}"
    );
}

fn seed_count() -> usize {
    if let Ok(value) = std::env::var("TAGMEND_STREAMING_PARITY_SEEDS")
        && let Ok(parsed) = value.parse::<usize>()
        && parsed > 0
    {
        return parsed;
    }
    if std::env::var("CI").is_ok() {
        DEFAULT_SEEDS_CI
    } else {
        DEFAULT_SEEDS_LOCAL
    }
}

fn run_budget() -> usize {
    if let Ok(value) = std::env::var("TAGMEND_STREAMING_PARITY_BUDGET")
        && let Ok(parsed) = value.parse::<usize>()
        && parsed > 0
    {
        return parsed;
    }
    if std::env::var("CI").is_ok() {
        DEFAULT_BUDGET_CI
    } else {
        DEFAULT_BUDGET_LOCAL
    }
}
