/// Category tokens that URL filenames often repeat before the real
/// extension (`manual_pdf.pdf`). They are dropped from the base name.
pub const CATEGORY_MARKERS: &[&str] = &[
    "_pdf", "_zip", "_stp", "_stl", "_jpg", "_rar", "_png", "_step",
];

/// Lower-case, underscore-normalized filename derived from the last path
/// segment of `url`, always terminated by that segment's extension (which
/// may be empty).
pub fn sanitize_filename(url: &str) -> String {
    let lowered = url.to_lowercase();
    let segment = last_path_segment(&lowered);
    let extension = extension_of(segment);

    let mut name = collapse_non_alphanumeric(segment);
    if let Some(rest) = name.strip_prefix('_') {
        name = rest.to_string();
    }
    for marker in CATEGORY_MARKERS {
        name = name.replace(marker, "");
    }

    name.push_str(extension);
    name
}

fn last_path_segment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn extension_of(segment: &str) -> &str {
    segment.rfind('.').map_or("", |idx| &segment[idx..])
}

/// Every run of characters outside `[a-z0-9]` becomes a single `_`.
fn collapse_non_alphanumeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }
    out
}
