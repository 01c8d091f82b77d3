use crate::model::ObjectId;

const SHORT_ID_LEN: usize = 7;

/// Abbreviate an id to its first 7 characters
pub fn short_id(id: &ObjectId) -> &str {
    let s = id.as_str();
    match s.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Render a path as `abc1234 -> def5678 -> ...`, eliding the middle of long paths
pub fn format_path(path: &[ObjectId], max_shown: usize) -> String {
    if path.len() <= max_shown || max_shown < 2 {
        return path.iter().map(short_id).collect::<Vec<_>>().join(" -> ");
    }

    let head = max_shown / 2;
    let tail = max_shown - head;
    let hidden = format!("... {} more ...", path.len() - max_shown);
    let mut parts: Vec<&str> = path[..head].iter().map(short_id).collect();
    parts.push(&hidden);
    parts.extend(path[path.len() - tail..].iter().map(short_id));
    parts.join(" -> ")
}
