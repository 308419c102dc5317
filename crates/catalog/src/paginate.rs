use contracts::domain::listing::{PageItem, PageWindow};

/// Максимум видимых номеров подряд, дальше окно сворачивается в пропуски
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Нарезать упорядоченный список на страницу и окно номеров.
///
/// `total_pages = ceil(len / page_size)`; пустой список даёт
/// `total_pages = 0` и пустое окно. `current_page` считается уже зажатым
/// вызывающей стороной в `[1, total_pages]` (см. [`crate::listing`]) —
/// это контракт вызова, а не восстанавливаемая ошибка; страница за
/// пределами списка даёт пустые `items`. `page_size` должен быть
/// положительным.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, current_page: usize) -> PageWindow<T> {
    debug_assert!(page_size > 0, "page_size должен быть положительным");

    if records.is_empty() || page_size == 0 {
        return PageWindow {
            items: Vec::new(),
            page_numbers: Vec::new(),
            current_page,
            total_pages: 0,
        };
    }

    let total_pages = records.len().div_ceil(page_size);

    let start = current_page.saturating_sub(1) * page_size;
    let items = if start < records.len() {
        records[start..(start + page_size).min(records.len())].to_vec()
    } else {
        Vec::new()
    };

    PageWindow {
        items,
        page_numbers: page_window(total_pages, current_page),
        current_page,
        total_pages,
    }
}

/// Окно номеров страниц с маркерами пропуска.
///
/// Три ветки для `total_pages > MAX_VISIBLE_PAGES` взаимоисключающие и
/// исчерпывающие; граничные значения `current_page = 3` и
/// `current_page = total_pages - 2` принадлежат первой и второй ветке
/// соответственно. Условия сохранены буквально, включая неровную ширину
/// окна при `total_pages` 6..7.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut window = Vec::new();
    if current_page <= 3 {
        window.extend((1..=MAX_VISIBLE_PAGES).map(PageItem::Page));
        window.push(PageItem::Ellipsis);
        window.push(PageItem::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        window.push(PageItem::Page(1));
        window.push(PageItem::Ellipsis);
        window.extend((total_pages - 4..=total_pages).map(PageItem::Page));
    } else {
        window.push(PageItem::Page(1));
        window.push(PageItem::Ellipsis);
        window.extend((current_page - 1..=current_page + 1).map(PageItem::Page));
        window.push(PageItem::Ellipsis);
        window.push(PageItem::Page(total_pages));
    }
    window
}
