pub const DEFAULT_PAGE_SIZE: usize = 6;

/// `ceil(count / page_size)`; zero for an empty result.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a requested 1-based page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Slice one page out of `items`. `page` is 1-based and already clamped.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.saturating_sub(1)).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Pager state for a result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub links: Vec<PageLink>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageControls {
    /// First and last page, the current page and its neighbours; gaps
    /// collapse into one ellipsis on each side.
    pub fn new(current: usize, total_pages: usize) -> Self {
        let mut links = Vec::new();

        for number in 1..=total_pages {
            let near_current = number + 1 >= current && number <= current + 1;
            if number == 1 || number == total_pages || near_current {
                links.push(PageLink::Page {
                    number,
                    current: number == current,
                });
            } else if (number + 2 == current && number > 1) || (number == current + 2 && number < total_pages) {
                links.push(PageLink::Ellipsis);
            }
        }

        Self {
            links,
            has_previous: current > 1,
            has_next: current < total_pages,
        }
    }
}
