//! Shell-style word splitting.
//!
//! Words are separated by whitespace. Single quotes keep their content
//! verbatim, double quotes allow `\\`, `\"`, `\$` and `` \` `` escapes, and a
//! backslash outside quotes escapes the next character. Quotes are removed
//! from the resulting words, so `part 'Power Train'` yields two words.
//! Classifier symbols glued to unquoted names are detached into words of
//! their own, so `x:T` yields `x`, `:` and `T`.

use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, delimited, preceded, repeat, terminated},
    error::ModalResult,
    token::{any, none_of, one_of, take_till, take_while},
};

use crate::identifier::find_classifier;

type Input<'a> = &'a str;

/// Text between single quotes, taken literally.
fn single_quoted(input: &mut Input<'_>) -> ModalResult<String> {
    delimited('\'', take_till(0.., '\''), '\'')
        .map(str::to_string)
        .parse_next(input)
}

/// A character inside double quotes, resolving the escapes a shell honors there.
fn double_quoted_char(input: &mut Input<'_>) -> ModalResult<char> {
    alt((
        preceded('\\', one_of(['\\', '"', '$', '`'])),
        none_of(['"']),
    ))
    .parse_next(input)
}

/// Text between double quotes.
fn double_quoted(input: &mut Input<'_>) -> ModalResult<String> {
    delimited('"', repeat(0.., double_quoted_char), '"').parse_next(input)
}

/// A backslash-escaped character outside quotes.
fn escaped(input: &mut Input<'_>) -> ModalResult<String> {
    preceded('\\', any).map(String::from).parse_next(input)
}

/// A run of ordinary characters.
fn bare(input: &mut Input<'_>) -> ModalResult<String> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, '"' | '\'' | '\\')
    })
    .map(str::to_string)
    .parse_next(input)
}

/// A piece of a word, remembering whether it was quoted or escaped.
enum Fragment {
    Literal(String),
    Bare(String),
}

/// One word, made of adjacent quoted and unquoted fragments.
///
/// Classifier symbols glued to unquoted text (`x:T`, `a:>B`) split the word,
/// so this may yield several words. Quoted text is never split.
fn word(input: &mut Input<'_>) -> ModalResult<Vec<String>> {
    let fragments: Vec<Fragment> = repeat(
        1..,
        alt((
            single_quoted.map(Fragment::Literal),
            double_quoted.map(Fragment::Literal),
            escaped.map(Fragment::Literal),
            bare.map(Fragment::Bare),
        )),
    )
    .parse_next(input)?;
    Ok(assemble(fragments))
}

fn assemble(fragments: Vec<Fragment>) -> Vec<String> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;

    for fragment in fragments {
        match fragment {
            Fragment::Literal(text) => current.get_or_insert_default().push_str(&text),
            Fragment::Bare(text) => {
                let mut rest = text.as_str();
                while let Some((start, end)) = find_classifier(rest) {
                    if start > 0 {
                        current.get_or_insert_default().push_str(&rest[..start]);
                    }
                    words.extend(current.take());
                    words.push(rest[start..end].to_string());
                    rest = &rest[end..];
                }
                if !rest.is_empty() {
                    current.get_or_insert_default().push_str(rest);
                }
            }
        }
    }

    words.extend(current);
    words
}

/// Split `line` into words.
///
/// Returns `None` when the line cannot be split, for example because a quote
/// is never closed or the line ends with a lone backslash.
pub(crate) fn tokenize(line: &str) -> Option<Vec<String>> {
    let mut input = line;
    let words: ModalResult<Vec<Vec<String>>> =
        preceded(multispace0, repeat(0.., terminated(word, multispace0))).parse_next(&mut input);

    match words {
        Ok(words) if input.is_empty() => Some(words.into_iter().flatten().collect()),
        _ => None,
    }
}
