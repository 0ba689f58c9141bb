//! Jump-to-page interaction: ask for a page number until the answer is in
//! range, then navigate to it.

use std::io::{BufRead, Write};

use crate::pagination::{PageWindowBuilder, PaginationRequest};
use crate::urls::UrlBuilder;

/// Source of raw answers for the jump prompt.
pub trait Prompt {
    /// Show `message` and return the raw answer, or `None` when cancelled.
    fn prompt_integer(&mut self, message: &str) -> Option<String>;
}

/// Line-oriented prompt over any reader/writer pair. End of input cancels.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn prompt_integer(&mut self, message: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{message} ").and_then(|_| self.output.flush()) {
            tracing::warn!("Failed to write prompt: {e}");
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read prompt answer: {e}");
                None
            }
        }
    }
}

/// Parse the leading integer of `raw`: optional whitespace, an optional sign,
/// then as many digits as follow. Trailing text is ignored and values too
/// large for `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // An all-digit run only fails to parse on overflow.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Ask for a page in `1..=total_pages`, re-asking while the answer is out of
/// range. Navigates to the chosen page and returns its URL. Returns `None`
/// without navigating when the answer is not a number or the prompt was
/// cancelled.
pub fn jump_to_page<P, U>(request: &PaginationRequest, prompt: &mut P, urls: &U) -> Option<String>
where
    P: Prompt,
    U: UrlBuilder,
{
    let total = i64::from(request.total_pages);
    let message = format!("Jump to page (1 - {total}):");

    let page = loop {
        let answer = prompt.prompt_integer(&message);
        let Some(page) = answer.as_deref().and_then(parse_leading_int) else {
            tracing::debug!("Jump cancelled: {answer:?}");
            return None;
        };
        if (1..=total).contains(&page) {
            break page;
        }
        tracing::debug!("Page {page} out of range 1..={total}");
    };

    // `page` is within 1..=total_pages, which came from a u32.
    let page = u32::try_from(page).ok()?;
    let url = PageWindowBuilder::new(request, urls).url_for_page(page);
    urls.go_to(&url);
    Some(url)
}
