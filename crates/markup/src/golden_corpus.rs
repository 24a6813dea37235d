//! Golden corpus for the completion driver.
//!
//! Each fixture names the output invariants it must satisfy; fixtures that
//! pin an exact expected output are additionally checked byte-for-byte. The
//! runner lives in `tests/golden_completion.rs`.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Invariant {
    /// The input is a byte prefix of the output.
    InputIsPrefixOfOutput,
    /// The output is tag-balanced.
    OutputIsBalanced,
    /// Completing the output again changes nothing.
    IdempotentOnOwnOutput,
    /// A balanced input comes back unchanged.
    BalancedInputUnchanged,
    /// The output is never shorter than the input.
    MonotonicLength,
    /// Input without any tag comes back unchanged.
    PlainTextUnchanged,
    /// Self-closing tags contribute no synthetic close.
    SelfClosingAddsNoClose,
    /// A close with no open tag is dropped without effect on the output.
    StrayCloseDropped,
}

impl Invariant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InputIsPrefixOfOutput => "input is prefix of output",
            Self::OutputIsBalanced => "output is balanced",
            Self::IdempotentOnOwnOutput => "idempotent on own output",
            Self::BalancedInputUnchanged => "balanced input unchanged",
            Self::MonotonicLength => "monotonic length",
            Self::PlainTextUnchanged => "plain text unchanged",
            Self::SelfClosingAddsNoClose => "self-closing adds no close",
            Self::StrayCloseDropped => "stray close dropped",
        }
    }
}

impl std::fmt::Display for Invariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FixtureKind {
    PlainText,
    Nesting,
    SelfClosing,
    StrayClose,
    Truncated,
    Attribute,
    Mixed,
}

#[derive(Clone, Copy, Debug)]
pub struct GoldenFixture {
    pub name: &'static str,
    pub input: &'static str,
    /// Exact expected output when the fixture pins one.
    pub expected: Option<&'static str>,
    pub covers: &'static str,
    pub invariants: &'static [Invariant],
    pub kind: FixtureKind,
}

const UNIVERSAL: &[Invariant] = &[
    Invariant::InputIsPrefixOfOutput,
    Invariant::OutputIsBalanced,
    Invariant::IdempotentOnOwnOutput,
    Invariant::MonotonicLength,
];

const GOLDEN_CORPUS_V1: &[GoldenFixture] = &[
    GoldenFixture {
        name: "empty_input",
        input: "",
        expected: Some(""),
        covers: "Empty string round-trips.",
        invariants: UNIVERSAL,
        kind: FixtureKind::PlainText,
    },
    GoldenFixture {
        name: "plain_text_no_angle",
        input: "hello streaming world",
        expected: Some("hello streaming world"),
        covers: "Text without `<` is untouched.",
        invariants: &[
            Invariant::PlainTextUnchanged,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::PlainText,
    },
    GoldenFixture {
        name: "plain_text_with_comparisons",
        input: "1 < 2 and 3 > 2",
        expected: Some("1 < 2 and 3 > 2"),
        covers: "Lone `<`/`>` that start no tag pass through.",
        invariants: &[
            Invariant::PlainTextUnchanged,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::PlainText,
    },
    GoldenFixture {
        name: "two_unclosed_with_text",
        input: "<div><span>hi",
        expected: Some("<div><span>hi</span></div>"),
        covers: "Innermost tag closed first.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Nesting,
    },
    GoldenFixture {
        name: "three_unclosed_no_text",
        input: "<a><b><c>",
        expected: Some("<a><b><c></c></b></a>"),
        covers: "Closes appended in reverse opening order.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Nesting,
    },
    GoldenFixture {
        name: "self_closing_between_text",
        input: "<div>text<br/>more",
        expected: Some("<div>text<br/>more</div>"),
        covers: "Self-closing tag leaves the stack alone.",
        invariants: &[
            Invariant::SelfClosingAddsNoClose,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::SelfClosing,
    },
    GoldenFixture {
        name: "self_closing_only",
        input: "<br/><hr/>",
        expected: Some("<br/><hr/>"),
        covers: "Document of only self-closing tags is balanced.",
        invariants: &[
            Invariant::SelfClosingAddsNoClose,
            Invariant::BalancedInputUnchanged,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::SelfClosing,
    },
    GoldenFixture {
        name: "stray_close_alone",
        input: "</div>",
        expected: Some("</div>"),
        covers: "Pop on empty stack is a no-op; nothing appended.",
        invariants: &[
            Invariant::StrayCloseDropped,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::StrayClose,
    },
    GoldenFixture {
        name: "stray_close_mid_document",
        input: "<b>x</b></i><c>",
        expected: Some("<b>x</b></i><c></c>"),
        covers: "Stray close between balanced and open regions.",
        invariants: &[
            Invariant::StrayCloseDropped,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::StrayClose,
    },
    GoldenFixture {
        name: "mismatched_close_pops_top",
        input: "<Div><span></Div>",
        expected: Some("<Div><span></Div></Div>"),
        covers: "Close pops without name validation; leniency preserved.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Mixed,
    },
    GoldenFixture {
        name: "balanced_document",
        input: "<article><h1>title</h1><p>body <em>text</em></p></article>",
        expected: Some("<article><h1>title</h1><p>body <em>text</em></p></article>"),
        covers: "Fully closed document is a fixpoint.",
        invariants: &[
            Invariant::BalancedInputUnchanged,
            Invariant::InputIsPrefixOfOutput,
            Invariant::OutputIsBalanced,
            Invariant::IdempotentOnOwnOutput,
            Invariant::MonotonicLength,
        ],
        kind: FixtureKind::Nesting,
    },
    GoldenFixture {
        name: "truncated_mid_tag",
        input: "<div><sp",
        expected: Some("<div><sp</div>"),
        covers: "A trailing tag fragment stays verbatim text. A second pass \
                 would read `<sp</div>` as one tag, so only the prefix and \
                 length invariants apply.",
        invariants: &[Invariant::InputIsPrefixOfOutput, Invariant::MonotonicLength],
        kind: FixtureKind::Truncated,
    },
    GoldenFixture {
        name: "truncated_mid_attribute",
        input: "<Card title=\"Strea",
        expected: Some("<Card title=\"Strea"),
        covers: "No `>` means no tag; the whole input is text.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Truncated,
    },
    GoldenFixture {
        name: "jsx_component_with_attributes",
        input: "<Card title=\"Streaming\" compact><Badge>",
        expected: Some("<Card title=\"Streaming\" compact><Badge></Badge></Card>"),
        covers: "Component names keep their case in synthetic closes.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Attribute,
    },
    GoldenFixture {
        name: "quoted_gt_desync",
        input: "<img src=\"a>b\"/>more",
        expected: Some("<img src=\"a>b\"/>more</img>"),
        covers: "A `>` inside quotes ends the tag early; scan degrades gracefully.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Attribute,
    },
    GoldenFixture {
        name: "double_angle_before_tag",
        input: "<<b>",
        expected: Some("<<b></b>"),
        covers: "An unusable `<` is skipped; the next one matches.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Mixed,
    },
    GoldenFixture {
        name: "no_void_element_inference",
        input: "<br>",
        expected: Some("<br></br>"),
        covers: "`<br>` without a slash opens like any other tag.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Mixed,
    },
    GoldenFixture {
        name: "unicode_text_around_tags",
        input: "é<b>café 😀",
        expected: Some("é<b>café 😀</b>"),
        covers: "Non-ASCII text around tags is preserved byte-for-byte.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Mixed,
    },
    GoldenFixture {
        name: "deep_unclosed_run",
        input: "<a1><a2><a3><a4><a5><a6>",
        expected: Some("<a1><a2><a3><a4><a5><a6></a6></a5></a4></a3></a2></a1>"),
        covers: "Longer unwind keeps strict reverse order.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Nesting,
    },
    GoldenFixture {
        name: "interleaved_text_and_closes",
        input: "intro <ul><li>one</li><li>two",
        expected: Some("intro <ul><li>one</li><li>two</li></ul>"),
        covers: "Mixed text, balanced pairs and an open tail.",
        invariants: UNIVERSAL,
        kind: FixtureKind::Mixed,
    },
];

pub fn fixtures() -> &'static [GoldenFixture] {
    GOLDEN_CORPUS_V1
}
