use super::expression::ComparisonOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Keyword {
    And,
    Or,
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    Word,
    Quoted,
    Keyword(Keyword),
    /// `None` for operator spellings outside the grammar, such as `!=` or `=>`.
    Operator(Option<ComparisonOp>),
}

/// A token with its byte span in the trigger source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '!')
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Splits trigger text into words, quoted strings, keywords and operators.
///
/// Keywords are only recognised as whole, unquoted words. An unterminated quote
/// runs to the end of the input.
pub(super) fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let (kind, end) = if is_quote(c) {
            chars.next();
            let mut end = source.len();
            for (i, next) in chars.by_ref() {
                if next == c {
                    end = i + next.len_utf8();
                    break;
                }
            }
            (TokenKind::Quoted, end)
        } else if is_operator_char(c) {
            let mut end = start;
            while let Some(&(i, next)) = chars.peek() {
                if !is_operator_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            (
                TokenKind::Operator(ComparisonOp::from_symbol(&source[start..end])),
                end,
            )
        } else {
            let mut end = start;
            while let Some(&(i, next)) = chars.peek() {
                if next.is_whitespace() || is_operator_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            (word_kind(&source[start..end]), end)
        };

        tokens.push(Token {
            kind,
            text: &source[start..end],
            start,
            end,
        });
    }

    tokens
}

fn word_kind(word: &str) -> TokenKind {
    if word.eq_ignore_ascii_case("and") {
        TokenKind::Keyword(Keyword::And)
    } else if word.eq_ignore_ascii_case("or") {
        TokenKind::Keyword(Keyword::Or)
    } else if word.eq_ignore_ascii_case("contains") {
        TokenKind::Keyword(Keyword::Contains)
    } else {
        TokenKind::Word
    }
}
