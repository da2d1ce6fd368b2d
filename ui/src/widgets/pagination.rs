use egui::Ui;
use userdeck_business::Pagination;

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Windowed page list: first and last page always shown, the current page
/// plus/minus two, and ellipses for the collapsed gaps.
pub(crate) fn visible_pages(current: u32, total_pages: u32) -> Vec<PageItem> {
    let current = i64::from(current);
    let total = i64::from(total_pages);
    if total < 1 {
        return Vec::new();
    }

    let mut items = vec![PageItem::Page(1)];
    if current - 2 > 2 {
        items.push(PageItem::Ellipsis);
    }

    let lo = 2.max(current - 2);
    let hi = (total - 1).min(current + 2);
    for page in lo..=hi {
        items.push(PageItem::Page(page as u32));
    }

    if current + 2 < total - 1 {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total as u32));
    } else if total > 1 {
        items.push(PageItem::Page(total as u32));
    }

    items
}

/// Prev/next buttons plus the windowed page strip. Hidden entirely when
/// everything fits on one page. Returns the page to navigate to.
pub fn pagination(ui: &mut Ui, pagination: &Pagination) -> Option<u32> {
    if pagination.total_pages <= 1 {
        return None;
    }

    let mut goto = None;

    ui.horizontal(|ui| {
        let at_first = pagination.page <= 1;
        if ui
            .add_enabled(!at_first, egui::Button::new("Previous"))
            .clicked()
        {
            goto = Some(pagination.page - 1);
        }

        for item in visible_pages(pagination.page, pagination.total_pages) {
            match item {
                PageItem::Ellipsis => {
                    ui.label("...");
                }
                PageItem::Page(page) => {
                    let selected = page == pagination.page;
                    if ui.selectable_label(selected, page.to_string()).clicked() && !selected {
                        goto = Some(page);
                    }
                }
            }
        }

        let at_last = pagination.page >= pagination.total_pages;
        if ui
            .add_enabled(!at_last, egui::Button::new("Next"))
            .clicked()
        {
            goto = Some(pagination.page + 1);
        }
    });

    goto
}


#[cfg(test)]
mod pagination_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use userdeck_business::Pagination;

    fn harness_with(state: Pagination) -> Harness<'static, Pagination> {
        Harness::new_ui_state(
            |ui, state| {
                super::pagination(ui, state);
            },
            state,
        )
    }

    #[test]
    fn hidden_when_one_page_fits_everything() {
        let mut harness = harness_with(Pagination {
            page: 1,
            limit: 10,
            total: 8,
            total_pages: 1,
        });
        harness.run();

        assert!(harness.query_by_label("Previous").is_none());
        assert!(harness.query_by_label("Next").is_none());
    }

    #[test]
    fn shows_strip_for_multiple_pages() {
        let mut harness = harness_with(Pagination {
            page: 2,
            limit: 10,
            total: 25,
            total_pages: 3,
        });
        harness.run();

        assert!(harness.query_by_label("Previous").is_some());
        assert!(harness.query_by_label("Next").is_some());
        assert!(harness.query_by_label("1").is_some());
        assert!(harness.query_by_label("3").is_some());
    }
}
