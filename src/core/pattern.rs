// src/core/pattern.rs
use std::iter::Peekable;
use std::str::Chars;

/// Canonical path separator used by compiled patterns and the paths
/// they are tested against.
pub const SEPARATOR: char = '/';

/// One element of a compiled pattern.
///
/// The dialect is deliberately narrow: `*` (any run of characters
/// excluding the separator), `**` (any run including separators), `?`
/// (one non-separator character). Every other character, including `.`,
/// `[` and `{`, is a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    Star,
    GlobStar,
}

/// A pattern compiled into a reusable path predicate.
///
/// Compilation is a pure function of the pattern string: compiling the
/// same string twice yields matchers with identical behavior. Matching
/// is case-sensitive and anchored to the whole relative path.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    tokens: Vec<Token>,
    depth_anchored: bool,
}

/// Normalizes platform path separators to the canonical `/`.
#[must_use]
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Whether the pattern contains any wildcard token. Wildcard-free
/// patterns are resolved by the matcher as a direct path lookup instead
/// of a tree scan.
#[must_use]
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiles a pattern string into a [`CompiledPattern`].
///
/// A leading `**/` is stripped and recorded as depth-anchoring: the
/// remainder may then match at the root or below any subdirectory.
/// Unsupported syntax never fails compilation; unrecognized characters
/// are kept as literals.
#[must_use]
pub fn compile(pattern: &str) -> CompiledPattern {
    let normalized = normalize_separators(pattern);
    let (body, depth_anchored) = normalized
        .strip_prefix("**/")
        .map_or((normalized.as_str(), false), |rest| (rest, true));

    CompiledPattern {
        tokens: tokenize(body),
        depth_anchored,
    }
}

fn tokenize(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<Chars<'_>> = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::GlobStar);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '?' => tokens.push(Token::AnyChar),
            other => tokens.push(Token::Literal(other)),
        }
    }
    tokens
}

impl CompiledPattern {
    /// Tests a normalized relative path (forward slashes, no leading
    /// separator) against the pattern.
    #[must_use]
    pub fn matches(&self, relative: &str) -> bool {
        let text: Vec<char> = relative.chars().collect();
        if !self.depth_anchored {
            return self.matches_at(&text, 0);
        }

        // Depth-anchored: the body may match at the root or directly
        // after any separator.
        (0..=text.len()).any(|start| {
            (start == 0 || text[start - 1] == SEPARATOR) && self.matches_at(&text, start)
        })
    }

    // Iterative table over the token list; after processing a token,
    // `row[j]` records whether the tokens so far can consume exactly the
    // first `j` characters of the tail. Avoids both regex construction
    // and call-stack recursion.
    fn matches_at(&self, text: &[char], start: usize) -> bool {
        let tail = &text[start..];
        let n = tail.len();
        let mut row = vec![false; n + 1];
        row[0] = true;

        for token in &self.tokens {
            let mut next = vec![false; n + 1];
            match *token {
                Token::Literal(c) => {
                    for j in 0..n {
                        if row[j] && tail[j] == c {
                            next[j + 1] = true;
                        }
                    }
                }
                Token::AnyChar => {
                    for j in 0..n {
                        if row[j] && tail[j] != SEPARATOR {
                            next[j + 1] = true;
                        }
                    }
                }
                Token::Star => {
                    next[0] = row[0];
                    for j in 1..=n {
                        next[j] = row[j] || (next[j - 1] && tail[j - 1] != SEPARATOR);
                    }
                }
                Token::GlobStar => {
                    next[0] = row[0];
                    for j in 1..=n {
                        next[j] = row[j] || next[j - 1];
                    }
                }
            }
            row = next;
        }

        row[n]
    }
}
