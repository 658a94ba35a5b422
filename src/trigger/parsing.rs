use super::expression::{AndGroup, Clause, ClauseKind, Literal, TriggerExpression};
use super::lexer::{Keyword, Token, TokenKind, tokenize};
use log::debug;

/// Parses trigger text into its OR-of-AND clause structure.
pub(super) fn parse_trigger(source: &str) -> TriggerExpression {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return TriggerExpression {
            source: source.to_string(),
            groups: Vec::new(),
        };
    }

    let tokens = tokenize(trimmed);
    let groups = tokens
        .split(|t| t.kind == TokenKind::Keyword(Keyword::Or))
        .map(|group| AndGroup {
            clauses: group
                .split(|t| t.kind == TokenKind::Keyword(Keyword::And))
                .map(|clause| parse_clause(trimmed, clause))
                .collect(),
        })
        .collect();

    TriggerExpression {
        source: source.to_string(),
        groups,
    }
}

fn parse_clause(source: &str, tokens: &[Token<'_>]) -> Clause {
    let text = span_text(source, tokens).to_string();

    let kind = match tokens {
        [only] if only.kind == TokenKind::Word && only.text.eq_ignore_ascii_case("true") => {
            ClauseKind::Constant(true)
        }
        [only] if only.kind == TokenKind::Word && only.text.eq_ignore_ascii_case("false") => {
            ClauseKind::Constant(false)
        }
        [node, op, rest @ ..] if node.kind == TokenKind::Word && !rest.is_empty() => {
            let literal = parse_literal(span_text(source, rest));
            match op.kind {
                TokenKind::Keyword(Keyword::Contains) => ClauseKind::Contains {
                    node_id: node.text.to_string(),
                    literal,
                },
                TokenKind::Operator(Some(op)) => ClauseKind::Compare {
                    node_id: node.text.to_string(),
                    op,
                    literal,
                },
                _ => ClauseKind::Invalid,
            }
        }
        _ => ClauseKind::Invalid,
    };

    if kind == ClauseKind::Invalid {
        debug!("Trigger clause '{}' does not match the grammar", text);
    }

    Clause { source: text, kind }
}

/// The source text covering a run of tokens, so multi-word literals keep their spacing.
fn span_text<'a>(source: &'a str, tokens: &[Token<'_>]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => &source[first.start..last.end],
        _ => "",
    }
}

/// Reads a right-hand literal: boolean keyword, then number, then string.
pub(crate) fn parse_literal(raw: &str) -> Literal {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return Literal::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Literal::Bool(false);
    }
    if is_numeric_literal(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return Literal::Number(n);
        }
    }
    Literal::Text(strip_quotes(trimmed).to_string())
}

/// Matches `-?digits(.digits)?`.
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut parts = unsigned.splitn(2, '.');
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some(whole), None) => all_digits(whole),
        (Some(whole), Some(fraction)) => all_digits(whole) && all_digits(fraction),
        _ => false,
    }
}

/// Drops at most one leading and one trailing quote character.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}
