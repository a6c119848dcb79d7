pub fn handle_unrecognized_line(keyword: Option<&str>, line_count: usize, line: &str) {
    let Some(keyword) = keyword else {
        return;
    };
    if keyword.starts_with('#') {
        return;
    }
    tracing::debug!(line = line_count, line_content = line, "\"{keyword}\" is not supported, line ignored");
}
