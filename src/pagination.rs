use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::urls::UrlBuilder;

/// Pages shown before the end regime takes over, counted back from the last page.
const TAIL_PAGES: u32 = 3;

pub const DEFAULT_MAX_PAGE_BUTTONS: u32 = 5;
pub const DEFAULT_PAGE_URL_KEY: &str = "page";

/// Inputs for one pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationRequest {
    pub base_url: String,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: u32,
    #[serde(default = "default_page_url_key")]
    pub page_url_key: String,
}

fn default_max_page_buttons() -> u32 {
    DEFAULT_MAX_PAGE_BUTTONS
}

fn default_page_url_key() -> String {
    DEFAULT_PAGE_URL_KEY.to_string()
}

impl PaginationRequest {
    pub fn new(base_url: impl Into<String>, current_page: u32, total_pages: u32) -> Self {
        Self {
            base_url: base_url.into(),
            current_page,
            total_pages,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            page_url_key: DEFAULT_PAGE_URL_KEY.to_string(),
        }
    }

    pub fn with_max_page_buttons(mut self, max_page_buttons: u32) -> Self {
        self.max_page_buttons = max_page_buttons;
        self
    }

    pub fn with_page_url_key(mut self, page_url_key: impl Into<String>) -> Self {
        self.page_url_key = page_url_key.into();
        self
    }

    /// Bring out-of-range values back into a shape the window logic accepts:
    /// at least one page and one button, current page within `1..=total_pages`.
    fn normalized(&self) -> (u32, u32, u32) {
        let total = self.total_pages.max(1);
        let current = self.current_page.clamp(1, total);
        let max_buttons = self.max_page_buttons.max(1);
        (current, total, max_buttons)
    }
}

/// One button of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMarker {
    Page { number: u32, url: String },
    Ellipsis,
}

impl PageMarker {
    pub fn number(&self) -> Option<u32> {
        match self {
            PageMarker::Page { number, .. } => Some(*number),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            PageMarker::Page { url, .. } => Some(url),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

// Templates expect `{number, url}` for every marker, with nulls for gaps.
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PageMarker", 2)?;
        s.serialize_field("number", &self.number())?;
        s.serialize_field("url", &self.url())?;
        s.end()
    }
}

/// Markers in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageWindow {
    markers: Vec<PageMarker>,
}

impl PageWindow {
    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Page numbers in order, `None` standing for an ellipsis.
    pub fn numbers(&self) -> Vec<Option<u32>> {
        self.markers.iter().map(PageMarker::number).collect()
    }

    /// Highest page emitted so far; pages are always pushed in ascending order.
    fn last_page(&self) -> Option<u32> {
        self.markers.iter().rev().find_map(PageMarker::number)
    }
}

impl IntoIterator for PageWindow {
    type Item = PageMarker;
    type IntoIter = std::vec::IntoIter<PageMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.into_iter()
    }
}

/// Previous/next buttons derived from the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub previous_page_number: Option<u32>,
    pub next_page_number: Option<u32>,
    pub previous_button_url: Option<String>,
    pub next_button_url: Option<String>,
}

/// Everything a presentation layer needs to draw the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: PageWindow,
    pub navigation: NavigationState,
}

/// Computes page windows and navigation URLs for one request.
pub struct PageWindowBuilder<'a, U: UrlBuilder> {
    request: &'a PaginationRequest,
    urls: &'a U,
}

impl<'a, U: UrlBuilder> PageWindowBuilder<'a, U> {
    pub fn new(request: &'a PaginationRequest, urls: &'a U) -> Self {
        Self { request, urls }
    }

    /// URL of `page_number`: the base URL with the page key set to that number.
    pub fn url_for_page(&self, page_number: u32) -> String {
        self.urls.set_query_params(
            &self.request.base_url,
            &[(self.request.page_url_key.as_str(), page_number.to_string())],
        )
    }

    pub fn build(&self) -> PageWindow {
        let (current, total, max_buttons) = self.request.normalized();
        let mut window = PageWindow::default();

        if current <= max_buttons {
            self.add_pages(&mut window, 1, max_buttons.min(total));
            if total > max_buttons {
                if total > max_buttons + 1 {
                    window.markers.push(PageMarker::Ellipsis);
                }
                self.add_page(&mut window, total);
            }
        } else if current > total.saturating_sub(TAIL_PAGES) {
            self.add_pages(&mut window, 1, 2);
            window.markers.push(PageMarker::Ellipsis);
            self.add_pages(&mut window, total.saturating_sub(TAIL_PAGES).max(1), total);
        } else {
            self.add_pages(&mut window, 1, 2);
            window.markers.push(PageMarker::Ellipsis);
            self.add_page(&mut window, current - 1);
            self.add_page(&mut window, current);
            self.add_page(&mut window, current + 1);
            window.markers.push(PageMarker::Ellipsis);
            self.add_page(&mut window, total);
        }

        window
    }

    pub fn navigation(&self) -> NavigationState {
        let (current, total, _) = self.request.normalized();
        let previous_page_number = (current > 1).then(|| current - 1);
        let next_page_number = (current != total).then(|| current + 1);

        NavigationState {
            previous_page_number,
            next_page_number,
            previous_button_url: previous_page_number
                .filter(|n| *n > 0)
                .map(|n| self.url_for_page(n)),
            next_button_url: next_page_number
                .filter(|n| *n > 0)
                .map(|n| self.url_for_page(n)),
        }
    }

    pub fn view(&self) -> PageView {
        let (current_page, total_pages, _) = self.request.normalized();
        PageView {
            current_page,
            total_pages,
            pages: self.build(),
            navigation: self.navigation(),
        }
    }

    /// Append `start..=end`, skipping numbers already in the window.
    fn add_pages(&self, window: &mut PageWindow, start: u32, end: u32) {
        let first = match window.last_page() {
            Some(last) if last >= end => return,
            Some(last) => start.max(last + 1),
            None => start,
        };
        for number in first..=end {
            self.add_page(window, number);
        }
    }

    fn add_page(&self, window: &mut PageWindow, number: u32) {
        window.markers.push(PageMarker::Page {
            number,
            url: self.url_for_page(number),
        });
    }
}

/// Shorthand for `PageWindowBuilder::new(request, urls).build()`.
pub fn build<U: UrlBuilder>(request: &PaginationRequest, urls: &U) -> PageWindow {
    PageWindowBuilder::new(request, urls).build()
}
