use serde::{Deserialize, Serialize};

use contracts::domain::listing::{FilterCriteria, PageWindow};
use contracts::enums::origin::Origin;
use contracts::enums::sort_key::SortKey;

use crate::paginate::paginate;
use crate::query::{query, CatalogItem};

/// Состояние списка на странице витрины.
///
/// Один явный контейнер вместо россыпи булевых флажков по замыканиям:
/// каждое взаимодействие меняет значение целиком, а [`ListingState::view`]
/// прогоняет чистый конвейер фильтр → сортировка → страница по полному
/// списку. Смена фильтра или сортировки сбрасывает на первую страницу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingState {
    pub criteria: FilterCriteria,

    #[serde(rename = "sortKey")]
    pub sort_key: SortKey,

    #[serde(rename = "pageSize")]
    pub page_size: usize,

    #[serde(rename = "currentPage")]
    pub current_page: usize,
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key: SortKey::Relevance,
            page_size,
            current_page: 1,
        }
    }

    /// Переключить флажок бренда
    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.criteria.brands.remove(brand) {
            self.criteria.brands.insert(brand.to_string());
        }
        self.current_page = 1;
    }

    /// Переключить флажок происхождения
    pub fn toggle_origin(&mut self, origin: Origin) {
        if !self.criteria.origins.remove(&origin) {
            self.criteria.origins.insert(origin);
        }
        self.current_page = 1;
    }

    pub fn set_fulfilled_only(&mut self, value: bool) {
        self.criteria.fulfilled_only = value;
        self.current_page = 1;
    }

    pub fn set_free_delivery_only(&mut self, value: bool) {
        self.criteria.free_delivery_only = value;
        self.current_page = 1;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.current_page = 1;
    }

    /// Запрошенная страница; верхняя граница зажимается в [`ListingState::view`]
    /// по фактической длине отфильтрованного списка
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Снять все фильтры (полный список, первая страница)
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.current_page = 1;
    }

    /// Прогнать конвейер по полному нефильтрованному списку.
    ///
    /// Зажатие `current_page` в `[1, total_pages]` происходит здесь, на
    /// стороне вызывающего, до вызова [`paginate`].
    pub fn view<T: CatalogItem + Clone>(&self, records: &[T]) -> PageWindow<T> {
        let filtered = query(records, &self.criteria, self.sort_key);

        let total_pages = if filtered.is_empty() {
            0
        } else {
            filtered.len().div_ceil(self.page_size)
        };
        let page = self.current_page.clamp(1, total_pages.max(1));

        paginate(&filtered, self.page_size, page)
    }
}
