use reqwest::header::{HeaderMap, LINK};
use reqwest::{StatusCode, Url};

const TOTAL_HEADER: &str = "X-Total";
const TOTAL_PAGES_HEADER: &str = "X-Total-Pages";
const PER_PAGE_HEADER: &str = "X-Per-Page";
const PAGE_HEADER: &str = "X-Page";
const NEXT_PAGE_HEADER: &str = "X-Next-Page";
const PREV_PAGE_HEADER: &str = "X-Prev-Page";

/// Transport level details of a completed call, returned alongside any decoded body.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    pagination: Pagination,
}

impl ApiResponse {
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn new(status: StatusCode, headers: HeaderMap) -> Self {
        let pagination = Pagination::from_headers(&headers);

        Self {
            status,
            headers,
            pagination,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Offset pagination details from the `X-*` headers and the keyset `next` link. GitLab omits
/// the totals on large collections and leaves the next/previous page headers blank at either
/// end, all of which show up here as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: Option<u64>,
    pub total_pages: Option<u64>,
    pub items_per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub next_link: Option<Url>,
}

impl Pagination {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total_items: numeric_header(headers, TOTAL_HEADER),
            total_pages: numeric_header(headers, TOTAL_PAGES_HEADER),
            items_per_page: numeric_header(headers, PER_PAGE_HEADER),
            current_page: numeric_header(headers, PAGE_HEADER),
            next_page: numeric_header(headers, NEXT_PAGE_HEADER),
            previous_page: numeric_header(headers, PREV_PAGE_HEADER),
            next_link: next_link(headers),
        }
    }
}

fn numeric_header(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

// Link: <https://gitlab.example.com/api/v4/...&page=2>; rel="next", <...>; rel="first"
fn next_link(headers: &HeaderMap) -> Option<Url> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|entry| {
            let mut parts = entry.split(';');

            let target = parts.next()?.trim();
            let target = target.strip_prefix('<')?.strip_suffix('>')?;

            let is_next = parts.any(|param| {
                let param = param.trim();
                param == "rel=\"next\"" || param == "rel=next"
            });

            if !is_next {
                return None;
            }

            Url::parse(target).ok()
        })
}
