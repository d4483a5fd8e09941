// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Output templates such as `($1) $2-$3`, split into literal text and
//! group references.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TemplateToken<'a> {
    Literal(&'a str),
    /// 1-based capturing group index.
    Group(usize),
}

/// Splits a template into tokens. `$` followed by a single digit is a group
/// reference; everything else is literal.
pub(crate) fn tokenize(template: &str) -> Vec<TemplateToken<'_>> {
    let mut tokens = Vec::new();
    let bytes = template.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
            if literal_start < i {
                tokens.push(TemplateToken::Literal(&template[literal_start..i]));
            }
            tokens.push(TemplateToken::Group((bytes[i + 1] - b'0') as usize));
            i += 2;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    if literal_start < template.len() {
        tokens.push(TemplateToken::Literal(&template[literal_start..]));
    }
    tokens
}

/// Fills the template with group contents. `groups[0]` is group `$1`.
///
/// A literal is written only once the group after it has digits, so an
/// empty trailing group drops the separator in front of it too. Literals
/// after the last group show up only when every group is complete.
pub(crate) fn fill(tokens: &[TemplateToken<'_>], groups: &[&str], complete: bool) -> String {
    let capacity = groups.iter().map(|g| g.len()).sum::<usize>() + tokens.len();
    let mut out = String::with_capacity(capacity);
    let mut pending = String::new();
    for token in tokens {
        match token {
            TemplateToken::Literal(text) => pending.push_str(text),
            TemplateToken::Group(index) => {
                let content = index
                    .checked_sub(1)
                    .and_then(|i| groups.get(i))
                    .copied()
                    .unwrap_or("");
                if content.is_empty() {
                    if complete {
                        continue;
                    }
                    return out;
                }
                out.push_str(&pending);
                pending.clear();
                out.push_str(content);
            }
        }
    }
    if complete {
        out.push_str(&pending);
    }
    out
}

/// Template used for international output when a rule has none: the
/// national template without parentheses, e.g. `($1) $2-$3` -> `$1 $2-$3`.
pub(crate) fn international_from_national(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    for c in template.chars() {
        match c {
            '(' | ')' | '\u{FF08}' | '\u{FF09}' => {}
            ' ' if out.is_empty() || out.ends_with(' ') => {}
            _ => out.push(c),
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Replaces standalone digits of a pattern by `\d`. Digits inside `{m,n}`
/// quantifiers and escapes are kept.
pub(crate) fn generalize_standalone_digits(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut in_quantifier = false;
    let mut escaped = false;
    for c in pattern.chars() {
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                out.push(c);
            }
            '{' => {
                in_quantifier = true;
                out.push(c);
            }
            '}' => {
                in_quantifier = false;
                out.push(c);
            }
            '0'..='9' if !in_quantifier => out.push_str("\\d"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{TemplateToken, fill, generalize_standalone_digits, international_from_national, tokenize};

    #[test]
    fn tokenizes_templates() {
        assert_eq!(
            tokenize("($1) $2-$3"),
            vec![
                TemplateToken::Literal("("),
                TemplateToken::Group(1),
                TemplateToken::Literal(") "),
                TemplateToken::Group(2),
                TemplateToken::Literal("-"),
                TemplateToken::Group(3),
            ]
        );
        assert_eq!(tokenize("$NP$FG"), vec![TemplateToken::Literal("$NP$FG")]);
    }

    #[test]
    fn fills_partial_groups() {
        let tokens = tokenize("($1) $2-$3");
        assert_eq!(fill(&tokens, &["919", "282", "34"], false), "(919) 282-34");
        assert_eq!(fill(&tokens, &["919", "", ""], false), "(919");
        assert_eq!(fill(&tokens, &["919", "282", "3456"], true), "(919) 282-3456");

        let tokens = tokenize("$1-$2");
        assert_eq!(fill(&tokens, &["919", ""], false), "919");
        assert_eq!(fill(&tokens, &["919", "2"], false), "919-2");
    }

    #[test]
    fn trailing_literal_needs_complete_number() {
        let tokens = tokenize("$1 $2)");
        assert_eq!(fill(&tokens, &["12", "3"], false), "12 3");
        assert_eq!(fill(&tokens, &["12", "34"], true), "12 34)");
    }

    #[test]
    fn international_template_has_no_parentheses() {
        assert_eq!(international_from_national("($1) $2-$3"), "$1 $2-$3");
        assert_eq!(international_from_national("$1 $2 $3"), "$1 $2 $3");
        assert_eq!(international_from_national("$1 ($2) $3"), "$1 $2 $3");
    }

    #[test]
    fn generic_patterns() {
        assert_eq!(generalize_standalone_digits("(1\\d{2})(\\d{4})"), "(\\d\\d{2})(\\d{4})");
        assert_eq!(generalize_standalone_digits("(\\d{3,4})"), "(\\d{3,4})");
    }
}
