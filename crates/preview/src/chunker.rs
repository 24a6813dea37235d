//! Chunk plans for streaming tests and harnesses.
//!
//! Deterministic fixed-size and boundary-based plans plus seeded fuzz plans
//! for reproducible streaming coverage in CI. Chunks are handed out as
//! `&str`, so every boundary lands on a UTF-8 char boundary; fixed-size plans
//! snap chunk ends forward to the next char boundary when needed.

use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChunkPlan {
    Fixed { size: usize },
    Boundaries { indices: Vec<usize> },
}

impl fmt::Display for ChunkPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkPlan::Fixed { size } => write!(f, "fixed size={size}"),
            ChunkPlan::Boundaries { indices } => {
                write!(f, "boundaries count={} indices={indices:?}", indices.len())
            }
        }
    }
}

impl ChunkPlan {
    pub fn fixed(size: usize) -> Self {
        Self::Fixed { size }
    }

    pub fn boundaries(indices: impl Into<Vec<usize>>) -> Self {
        Self::Boundaries {
            indices: indices.into(),
        }
    }

    pub fn for_each_chunk(&self, input: &str, mut f: impl FnMut(&str)) {
        match self {
            ChunkPlan::Fixed { size } => {
                assert!(*size > 0, "chunk size must be > 0");
                let mut offset = 0usize;
                while offset < input.len() {
                    let mut end = (offset + size).min(input.len());
                    while !input.is_char_boundary(end) {
                        end += 1;
                    }
                    f(&input[offset..end]);
                    offset = end;
                }
            }
            ChunkPlan::Boundaries { indices } => {
                // Boundaries are normalized: sorted, deduped, clipped to
                // (0, len), and restricted to char boundaries.
                let mut points: Vec<usize> = indices
                    .iter()
                    .copied()
                    .filter(|&idx| idx > 0 && idx < input.len() && input.is_char_boundary(idx))
                    .collect();
                points.sort_unstable();
                points.dedup();
                let mut last = 0usize;
                for idx in points {
                    f(&input[last..idx]);
                    last = idx;
                }
                if last < input.len() {
                    f(&input[last..]);
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChunkPlanCase {
    pub label: String,
    pub plan: ChunkPlan,
}

/// Build deterministic + fuzz chunk plans for the given input.
///
/// - Deterministic includes fixed sizes and splits around tag-significant
///   bytes (`<`, `>`, quotes).
/// - Fuzz plans are seeded for CI reproducibility.
pub fn build_chunk_plans(input: &str, fuzz_runs: usize, fuzz_seed: u64) -> Vec<ChunkPlanCase> {
    let mut plans = Vec::new();

    for size in [1usize, 2, 3, 4, 8, 16, 32, 64] {
        plans.push(ChunkPlanCase {
            label: format!("fixed size={size}"),
            plan: ChunkPlan::fixed(size),
        });
    }

    let tag_boundaries = tag_boundary_indices(input);
    if !tag_boundaries.is_empty() {
        plans.push(ChunkPlanCase {
            label: format!("tag-boundaries count={}", tag_boundaries.len()),
            plan: ChunkPlan::boundaries(tag_boundaries.clone()),
        });
    }

    if fuzz_runs > 0 {
        let mut candidates = char_boundaries(input);
        candidates.extend(tag_boundaries);
        candidates.sort_unstable();
        candidates.dedup();
        for run in 0..fuzz_runs {
            let seed = fuzz_seed.wrapping_add(run as u64);
            let mut rng = Lcg::new(seed);
            let plan = if candidates.is_empty() {
                // Fallback for empty/1-byte inputs.
                ChunkPlan::fixed(1)
            } else {
                let max = candidates.len().clamp(1, 32);
                let mut picks = candidates.clone();
                rng.shuffle(&mut picks);
                picks.truncate(1 + rng.gen_range(max));
                ChunkPlan::boundaries(picks)
            };
            plans.push(ChunkPlanCase {
                label: format!("fuzz boundaries seed=0x{seed:016x}"),
                plan,
            });
        }
    }

    plans
}

fn tag_boundary_indices(input: &str) -> Vec<usize> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    for (idx, &byte) in bytes.iter().enumerate() {
        if matches!(byte, b'<' | b'>' | b'/' | b'"' | b'\'') {
            out.push(idx);
            if idx + 1 < bytes.len() {
                out.push(idx + 1);
            }
        }
    }
    out.sort_unstable();
    out.dedup();
    out.retain(|&idx| idx > 0 && idx < input.len());
    out
}

fn char_boundaries(input: &str) -> Vec<usize> {
    input
        .char_indices()
        .map(|(idx, _)| idx)
        .filter(|&idx| idx != 0)
        .collect()
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn gen_range(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as usize % upper
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.gen_range(i + 1);
            items.swap(i, j);
        }
    }
}
