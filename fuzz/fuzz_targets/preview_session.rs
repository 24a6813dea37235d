#![no_main]

use libfuzzer_sys::fuzz_target;
use preview::PreviewSession;
use preview::chunker::ChunkPlan;

fuzz_target!(|data: &[u8]| {
    let Some((&size_byte, rest)) = data.split_first() else {
        return;
    };
    let input = String::from_utf8_lossy(rest);
    let size = usize::from(size_byte).max(1);

    let mut session = PreviewSession::new();
    let mut accumulated = String::new();
    ChunkPlan::fixed(size).for_each_chunk(&input, |chunk| {
        session.push_str(chunk);
        accumulated.push_str(chunk);
        let expected = markup::complete(&accumulated);
        assert_eq!(
            session.renderable(),
            expected,
            "session view must match a fresh completion of the source"
        );
    });

    session.finish();
    assert_eq!(session.renderable(), input, "finished stream renders raw");
});
