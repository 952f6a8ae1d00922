/// Maximum number of characters of product information embedded in the
/// prompt. Keeps the prompt size (and provider cost) bounded.
pub const PRODUCT_INFO_LIMIT: usize = 2000;

/// Normalizes scraped product information into a compact, line-trimmed block:
/// runs of spaces collapse to one space, runs of newlines collapse to one
/// newline, each line is trimmed, and lines left empty are dropped.
///
/// The operation is idempotent: normalizing already-normalized text is a
/// no-op.
pub fn normalize_product_info(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut prev: Option<char> = None;
    for ch in raw.chars() {
        let repeated = matches!((prev, ch), (Some(' '), ' ') | (Some('\n'), '\n'));
        if !repeated {
            collapsed.push(ch);
        }
        prev = Some(ch);
    }

    collapsed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses all whitespace runs in a product title (spaces, tabs, newlines)
/// to single spaces and trims the ends.
pub fn normalize_product_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates text to the first `PRODUCT_INFO_LIMIT` characters. Counts
/// characters, not bytes, so multi-byte text is never split mid-scalar.
pub fn truncate_product_info(info: &str) -> String {
    info.chars().take(PRODUCT_INFO_LIMIT).collect()
}
