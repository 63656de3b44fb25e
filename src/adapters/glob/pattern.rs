//! Pattern preprocessing for syntax the `glob` crate lacks
//!
//! - Brace alternation: `*.{ts,tsx}` expands to `*.ts` and `*.tsx`
//! - Negated extglob groups: `!(index|main).ts` matches like `*.ts`, minus
//!   entries where the group would match `index` or `main`

/// Expand every `{a,b}` group into separate patterns, left to right
///
/// Groups without a top-level comma (`{a}`) and unbalanced braces are kept
/// literally. A backslash escapes the next character.
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_alternation(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    split_top_level(&pattern[open + 1..close], ',')
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{prefix}{alternative}{suffix}")))
        .collect()
}

/// A pattern with its negated groups split out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegatedPattern {
    /// The pattern with every `!(...)` group replaced by `*`
    pub positive: String,
    /// Patterns that, when matched, exclude an entry
    pub exclusions: Vec<String>,
}

impl NegatedPattern {
    /// Whether the pattern had any negated group
    #[must_use]
    pub fn has_exclusions(&self) -> bool {
        !self.exclusions.is_empty()
    }
}

/// Split `!(a|b)` groups out of a pattern
///
/// For each group and each of its alternatives an exclusion pattern is built
/// with that group replaced by the alternative and every other group by `*`.
#[must_use]
pub fn split_negations(pattern: &str) -> NegatedPattern {
    let groups = find_negated_groups(pattern);
    let positive = render(pattern, &groups, None);
    let exclusions = groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| {
            group
                .alternatives
                .iter()
                .map(move |alternative| (index, alternative.as_str()))
        })
        .map(|pick| render(pattern, &groups, Some(pick)))
        .collect();

    NegatedPattern {
        positive,
        exclusions,
    }
}

/// Byte range of a `!(...)` group and its `|`-separated alternatives
struct NegatedGroup {
    start: usize,
    end: usize,
    alternatives: Vec<String>,
}

fn find_negated_groups(pattern: &str) -> Vec<NegatedGroup> {
    let bytes = pattern.as_bytes();
    let mut groups = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'!' && bytes[i + 1] == b'(' {
            if let Some(close) = matching_close(pattern, i + 1) {
                groups.push(NegatedGroup {
                    start: i,
                    end: close + 1,
                    alternatives: split_top_level(&pattern[i + 2..close], '|'),
                });
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }
    groups
}

fn render(pattern: &str, groups: &[NegatedGroup], pick: Option<(usize, &str)>) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut last = 0;
    for (index, group) in groups.iter().enumerate() {
        out.push_str(&pattern[last..group.start]);
        match pick {
            Some((picked, alternative)) if picked == index => out.push_str(alternative),
            _ => out.push('*'),
        }
        last = group.end;
    }
    out.push_str(&pattern[last..]);
    out
}

/// Index of the `)` or `}` closing the bracket at `open`
fn matching_close(pattern: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in pattern.char_indices().skip_while(|(i, _)| *i < open) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' | '{' => depth += 1,
            ')' | '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }
    None
}

/// First brace group containing a top-level comma
fn find_alternation(pattern: &str) -> Option<(usize, usize)> {
    let mut escaped = false;
    let mut search_from = 0;
    for (i, c) in pattern.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '{' && i >= search_from {
            let close = matching_close(pattern, i)?;
            if split_top_level(&pattern[i + 1..close], ',').len() > 1 {
                return Some((i, close));
            }
            search_from = close + 1;
        }
    }
    None
}

/// Split on `separator` where it is not nested inside `()`, `{}` or `[]`
fn split_top_level(body: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut escaped = false;
    for c in body.chars() {
        if escaped {
            escaped = false;
            current.push(c);
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                current.push(c);
            },
            '(' | '{' | '[' => {
                depth += 1;
                current.push(c);
            },
            ')' | '}' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            },
            c if c == separator && depth == 0 => parts.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    parts.push(current);
    parts
}
