// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation commands for `paginated_list`.

use core::str::FromStr;

use stillwater_paging::Pagination;

/// A navigation step, as typed on the command line.
///
/// `next`, `prev`, `first`, `last`, `goto N`, or a bare page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// Next page.
    Next,
    /// Previous page.
    Prev,
    /// First page.
    First,
    /// Last page.
    Last,
    /// A specific one-based page, clamped into range.
    Goto(usize),
}

/// Error for command-line tokens that do not form a navigation command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseNavCommandError {
    /// A token that is neither a keyword nor a page number.
    #[error(
        "unknown navigation command `{0}` (expected next, prev, first, last, goto N, or a page number)"
    )]
    Unknown(String),
    /// `goto` without a page number after it.
    #[error("`{0}` must be followed by a page number")]
    MissingPage(String),
    /// `goto` followed by something other than a page number.
    #[error("`{0}` is not a page number")]
    BadPage(String),
}

fn is_goto(token: &str) -> bool {
    token.eq_ignore_ascii_case("goto") || token.eq_ignore_ascii_case("g")
}

fn parse_page(token: &str) -> Result<usize, ParseNavCommandError> {
    token
        .parse()
        .map_err(|_| ParseNavCommandError::BadPage(token.to_owned()))
}

impl FromStr for NavCommand {
    type Err = ParseNavCommandError;

    /// Parses a single command. `goto N` may be given as one string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(keyword), Some(page), None) if is_goto(keyword) => {
                parse_page(page).map(Self::Goto)
            }
            (Some(keyword), None, None) if is_goto(keyword) => {
                Err(ParseNavCommandError::MissingPage(keyword.to_owned()))
            }
            _ => match s.to_ascii_lowercase().as_str() {
                "next" | "n" => Ok(Self::Next),
                "prev" | "p" => Ok(Self::Prev),
                "first" => Ok(Self::First),
                "last" => Ok(Self::Last),
                other => other
                    .parse()
                    .map(Self::Goto)
                    .map_err(|_| ParseNavCommandError::Unknown(s.to_owned())),
            },
        }
    }
}

/// Parses a sequence of command-line tokens, joining `goto` with the page
/// number that follows it.
///
/// # Errors
///
/// Returns the first token that does not form a command.
pub fn parse_commands<S: AsRef<str>>(
    tokens: &[S],
) -> Result<Vec<NavCommand>, ParseNavCommandError> {
    let mut commands = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.iter().map(|token| token.as_ref());
    while let Some(token) = tokens.next() {
        let command = if is_goto(token) {
            let page = tokens
                .next()
                .ok_or_else(|| ParseNavCommandError::MissingPage(token.to_owned()))?;
            NavCommand::Goto(parse_page(page)?)
        } else {
            token.parse()?
        };
        commands.push(command);
    }
    Ok(commands)
}

impl NavCommand {
    /// Applies the command, returning `true` if the current page changed.
    pub fn apply(self, pages: &mut Pagination) -> bool {
        let before = pages.current_page();
        match self {
            Self::Next => {
                pages.next_page();
            }
            Self::Prev => {
                pages.prev_page();
            }
            Self::First => pages.first_page(),
            Self::Last => pages.last_page(),
            Self::Goto(page) => pages.set_page(page),
        }
        pages.current_page() != before
    }
}
