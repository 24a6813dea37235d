#![no_main]

use libfuzzer_sys::fuzz_target;
use markup::match_next_tag;

fuzz_target!(|data: &[u8]| {
    let fragment = String::from_utf8_lossy(data);
    let Some(tag) = match_next_tag(&fragment) else {
        return;
    };

    assert!(tag.start < tag.end, "match must consume at least one byte");
    assert!(tag.end <= fragment.len(), "match must stay inside the fragment");
    assert!(
        fragment.is_char_boundary(tag.start) && fragment.is_char_boundary(tag.end),
        "offsets must be char boundaries"
    );

    let text = &fragment[tag.start..tag.end];
    assert!(text.starts_with('<') && text.ends_with('>'));
    assert!(!tag.name.is_empty(), "tag name must be non-empty");
    assert!(
        tag.name.bytes().next().is_some_and(|b| b.is_ascii_alphabetic()),
        "tag name must start with a letter"
    );
    assert!(
        text.contains(tag.name),
        "name must come from the matched text"
    );
});
