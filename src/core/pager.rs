//! Page number window for pagination controls.

/// Default number of page buttons on each side of the current page.
pub const DEFAULT_RADIUS: u32 = 2;

/// Consecutive page numbers around `current`, clipped to `1..=total`.
///
/// A `total` below one is treated as a single page.
pub fn page_window(current: u32, total: u32, radius: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);
    (start..=end).collect()
}

/// One pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Prev,
    Page { number: u32, active: bool },
    Next,
}

impl PageButton {
    /// Target page for this button, or `None` when it points before page 1.
    pub fn target(self, current: u32) -> Option<u32> {
        match self {
            PageButton::Prev => current.checked_sub(1),
            PageButton::Page { number, .. } => Some(number),
            PageButton::Next => current.checked_add(1),
        }
    }
}

/// The full control row: Prev, the page window, Next.
pub fn page_buttons(current: u32, total: u32, radius: u32) -> Vec<PageButton> {
    let mut buttons = vec![PageButton::Prev];
    buttons.extend(
        page_window(current, total, radius)
            .into_iter()
            .map(|number| PageButton::Page {
                number,
                active: number == current,
            }),
    );
    buttons.push(PageButton::Next);
    buttons
}
