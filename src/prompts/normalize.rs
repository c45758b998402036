/// Throat-clearing openers the vision model tends to produce despite being
/// told not to. At most one is stripped, case-insensitively.
const PREAMBLES: [&str; 7] = [
    "The image shows ",
    "This shows ",
    "I see ",
    "In this image, ",
    "This is ",
    "Here is ",
    "Looking at ",
];

/// Cleans the raw model output into a bare description: collapses all
/// whitespace (newlines included) to single spaces, trims, strips one layer
/// of wrapping quotes, then strips one leading preamble.
///
/// `"  'The image shows a man.'  \n\n  "` becomes `"a man."`.
pub fn normalize_description(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut text = collapsed.as_str();
    text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    text = text.trim();

    for preamble in PREAMBLES {
        if let Some(head) = text.get(..preamble.len()) {
            if head.eq_ignore_ascii_case(preamble) {
                text = &text[preamble.len()..];
                break;
            }
        }
    }

    text.trim().to_string()
}
