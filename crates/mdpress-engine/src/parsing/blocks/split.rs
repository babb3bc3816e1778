/// Partitions a raw Markdown document into trimmed, non-empty block strings.
///
/// A block boundary is either a blank line or the start of a line whose
/// first character is `#`, so a heading directly following other text still
/// opens its own block. Output order matches document order.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in markdown.split('\n') {
        if line.is_empty() {
            flush(&mut blocks, &mut current);
            continue;
        }
        if line.starts_with('#') {
            flush(&mut blocks, &mut current);
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut String) {
    let block = std::mem::take(current);
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
