#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let output = markup::complete(&input);

    assert!(output.starts_with(input.as_ref()), "input must prefix output");
    assert!(output.len() >= input.len(), "length must be monotonic");
    assert_eq!(
        markup::is_balanced(&input),
        output == input,
        "balanced inputs and only balanced inputs come back unchanged"
    );

    // The appended tail is nothing but `</name>` closes.
    let mut tail = &output[input.len()..];
    while !tail.is_empty() {
        assert!(tail.starts_with("</"), "tail must be synthetic closes: {tail:?}");
        let gt = tail.find('>').expect("synthetic close must terminate");
        let name = &tail[2..gt];
        assert!(
            !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric()),
            "synthetic close must carry a matched tag name: {name:?}"
        );
        tail = &tail[gt + 1..];
    }
});
