//! Fenced data block extraction.
//!
//! Obsidian stores the scene in a fenced code block near the end of the
//! markdown document:
//!
//! ````text
//! ```compressed-json
//! N4KAkARALgngDgUwgLgAQQQDwMYEMA2AlgCYBOuA7hADTgQBuCpAzoQPYB2KqATLZMzYBXUtiRoIACyhQ4zZAHoFAc0JRJQgEYA6bGwC2CgF7N6hbEcK4OCtptbErHALRY8RMpWdx8Q1TdIEfARcZgRmBShcZQUebR4AFm0eADYaOiCEfQQOKGZuAG1wMFAwYogSbggAR0I2AElS
//! ```
//! ````
//!
//! Long payloads are wrapped over several lines. Older documents may carry a
//! plain `json` block instead.

use std::ops::Range;

use winnow::{
    Parser as _,
    ascii::line_ending,
    combinator::{opt, repeat_till, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::LocatingSlice,
    token::{any, literal, take_until},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

const FENCE: &str = "```";

/// Info string of the LZ-String compressed block.
pub(crate) const COMPRESSED_TAG: &str = "compressed-json";

/// Info string of the plain JSON block.
pub(crate) const PLAIN_TAG: &str = "json";

/// A located data block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    /// The opening fence line, including its line ending.
    pub fence: Span,
    /// Everything between the opening line and the closing fence.
    pub body: Spanned<&'a str>,
}

/// `` ```tag `` followed by a line ending.
fn opening_fence<'a>(
    tag: &'static str,
) -> impl winnow::Parser<Input<'a>, Range<usize>, ErrMode<ContextError>> {
    (FENCE, literal(tag), line_ending).span()
}

/// Skips ahead to the first opening fence for `tag`.
fn seek_opening_fence<'a>(input: &mut Input<'a>, tag: &'static str) -> IResult<Range<usize>> {
    repeat_till(0.., any, opening_fence(tag))
        .map(|((), fence): ((), Range<usize>)| fence)
        .parse_next(input)
}

/// The block payload up to and including the closing fence.
fn block_body<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Range<usize>)> {
    terminated(take_until(0.., FENCE).with_span(), FENCE).parse_next(input)
}

/// Finds the first block tagged `tag` in `source`.
///
/// Returns `Ok(None)` when no such block opens, and an E002 diagnostic
/// when it opens but never closes.
pub(crate) fn find_block<'a>(
    source: &'a str,
    tag: &'static str,
) -> Result<Option<Block<'a>>, Diagnostic> {
    let mut input = Input::new(source);

    let Ok(Some(fence)) = opt(|i: &mut Input<'a>| seek_opening_fence(i, tag)).parse_next(&mut input)
    else {
        return Ok(None);
    };
    let fence = Span::new(fence);

    match block_body(&mut input) {
        Ok((body, range)) => Ok(Some(Block {
            fence,
            body: Spanned::new(body, Span::new(range)),
        })),
        Err(_) => Err(Diagnostic::error(format!("`{tag}` block is never closed"))
            .with_code(ErrorCode::E002)
            .with_label(fence, "block opened here")
            .with_help("add a closing ``` fence after the payload")),
    }
}
