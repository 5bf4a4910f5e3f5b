const SEP: u8 = b'/';

/// Options for [`glob_match_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Fold ASCII case before comparing. Off by default.
    pub case_insensitive: bool,
    /// When set, `*`, `?`, and `[...]` refuse to match a `.` that starts a
    /// path segment, so hidden entries only match literally. Off by default:
    /// wildcards match leading dots like any other character.
    pub protect_hidden: bool,
}

fn fold(c: u8, case_insensitive: bool) -> u8 {
    if case_insensitive {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

/// Match `text` against `glob` with default options (case-sensitive, no
/// hidden-entry protection).
pub fn glob_match(text: &str, glob: &str) -> bool {
    glob_match_with(text, glob, MatchOptions::default())
}

/// Match a path against a single gitignore-style glob pattern.
///
/// `text` uses `/` as its separator. A glob that starts with `/` is anchored
/// to the full path (leading `./` pairs and one leading `/` of the path are
/// skipped first); a glob without any `/` matches only the basename; any
/// other glob matches the full path. `*` matches within one segment, `**/`
/// crosses segments, `**` at the end of the glob matches the whole rest,
/// `?` matches one non-separator character, `[...]` is a character class
/// with `^`/`!` negation and `a-z` ranges, and `\` escapes the next
/// character.
///
/// The scan is iterative: a mismatch retries at most two bookmarks, one for
/// the last `*` (which never steps over a separator) and one for the last
/// `**/` (which may). Worst case O(len(text) * len(glob)), O(1) state.
///
/// Comparison is byte-wise; case folding applies to ASCII only.
pub fn glob_match_with(text: &str, glob: &str, opts: MatchOptions) -> bool {
    let text = text.as_bytes();
    let glob = glob.as_bytes();
    let n = text.len();
    let m = glob.len();
    let mut i = 0usize;
    let mut j = 0usize;
    // (text, glob) resume positions for the last * and the last **/
    let mut star: Option<(usize, usize)> = None;
    let mut star_star: Option<(usize, usize)> = None;
    let mut nodot = opts.protect_hidden;

    if j + 1 < m && glob[j] == b'/' {
        // anchored: compare against the full path, minus ./ pairs and one
        // leading /
        while i + 1 < n && text[i] == b'.' && text[i + 1] == SEP {
            i += 2;
        }
        if i < n && text[i] == SEP {
            i += 1;
        }
        j += 1;
    } else if !glob.contains(&SEP) {
        // no separator anywhere in the glob: match the basename only
        if let Some(sep) = text.iter().rposition(|&c| c == SEP) {
            i = sep + 1;
        }
    }

    'scan: while i < n {
        'mismatch: {
            if j >= m {
                break 'mismatch;
            }
            match glob[j] {
                b'*' => {
                    if nodot && text[i] == b'.' {
                        break 'mismatch;
                    }
                    j += 1;
                    if j < m && glob[j] == b'*' {
                        j += 1;
                        // trailing ** matches everything left
                        if j >= m {
                            return true;
                        }
                        // ** is only meaningful before a /
                        if glob[j] != SEP {
                            return false;
                        }
                        // new **-loop discards the *-loop
                        star = None;
                        j += 1;
                        star_star = Some((i, j));
                        continue 'scan;
                    }
                    star = Some((i, j));
                    continue 'scan;
                }
                b'?' => {
                    if nodot && text[i] == b'.' {
                        break 'mismatch;
                    }
                    if text[i] == SEP {
                        break 'mismatch;
                    }
                    i += 1;
                    j += 1;
                    continue 'scan;
                }
                b'[' => {
                    if nodot && text[i] == b'.' {
                        break 'mismatch;
                    }
                    if text[i] == SEP {
                        break 'mismatch;
                    }
                    let c = fold(text[i], opts.case_insensitive);
                    let negate = j + 1 < m && (glob[j + 1] == b'^' || glob[j + 1] == b'!');
                    if negate {
                        j += 1;
                    }
                    let mut matched = false;
                    // low bound left by the previous class member, for ranges
                    let mut last: Option<u8> = None;
                    j += 1;
                    while j < m && glob[j] != b']' {
                        match last {
                            Some(lo) if glob[j] == b'-' && j + 1 < m && glob[j + 1] != b']' => {
                                j += 1;
                                let hi = fold(glob[j], opts.case_insensitive);
                                if c >= lo && c <= hi {
                                    matched = true;
                                }
                                last = Some(hi);
                            }
                            _ => {
                                let g = fold(glob[j], opts.case_insensitive);
                                if c == g {
                                    matched = true;
                                }
                                last = Some(g);
                            }
                        }
                        j += 1;
                    }
                    // an unterminated class falls out here with j == m and
                    // simply fails to consume the rest of the glob
                    if matched == negate {
                        break 'mismatch;
                    }
                    i += 1;
                    if j < m {
                        j += 1;
                    }
                    continue 'scan;
                }
                ch => {
                    let lit = if ch == b'\\' && j + 1 < m {
                        j += 1;
                        glob[j]
                    } else {
                        ch
                    };
                    if fold(lit, opts.case_insensitive) != fold(text[i], opts.case_insensitive)
                        && !(lit == b'/' && text[i] == SEP)
                    {
                        break 'mismatch;
                    }
                    nodot = opts.protect_hidden && lit == b'/';
                    i += 1;
                    j += 1;
                    continue 'scan;
                }
            }
        }
        // *-loop: retry one character further, but never across a separator
        if let Some((t1, g1)) = star {
            if text[t1] != SEP {
                star = Some((t1 + 1, g1));
                i = t1 + 1;
                j = g1;
                continue;
            }
        }
        // **-loop: retry one character further, separators included
        if let Some((t2, g2)) = star_star {
            star_star = Some((t2 + 1, g2));
            i = t2 + 1;
            j = g2;
            continue;
        }
        return false;
    }

    // text exhausted: trailing stars match the empty rest
    while j < m && glob[j] == b'*' {
        j += 1;
    }
    j >= m
}
