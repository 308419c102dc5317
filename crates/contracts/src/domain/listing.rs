use std::collections::BTreeSet;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::product::ProductRecord;
use crate::enums::origin::Origin;

// ============================================================================
// Filter Criteria
// ============================================================================

/// Критерии фильтрации списка товаров.
///
/// Набор независимых необязательных предикатов: пустое множество или
/// снятый флажок означают "пропускать всё", а не "не совпадает ничего".
/// Снятие всех фильтров обязано вернуть полный список. Критерии каждый раз
/// пересобираются из состояния контролов целиком и применяются только к
/// исходному нефильтрованному списку.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub origins: BTreeSet<Origin>,

    pub brands: BTreeSet<String>,

    #[serde(rename = "fulfilledOnly")]
    pub fulfilled_only: bool,

    #[serde(rename = "freeDeliveryOnly")]
    pub free_delivery_only: bool,
}

impl FilterCriteria {
    /// Нет ни одного активного критерия
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
            && self.brands.is_empty()
            && !self.fulfilled_only
            && !self.free_delivery_only
    }

    /// Число активных фильтров (для бейджа на панели фильтров)
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.origins.is_empty() {
            count += 1;
        }
        if !self.brands.is_empty() {
            count += 1;
        }
        if self.fulfilled_only {
            count += 1;
        }
        if self.free_delivery_only {
            count += 1;
        }
        count
    }

    /// Конъюнкция всех активных критериев
    pub fn matches(&self, product: &ProductRecord) -> bool {
        if !self.origins.is_empty() && !self.origins.contains(&product.origin) {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if self.fulfilled_only && !product.fulfilled_by_platform {
            return false;
        }
        if self.free_delivery_only && !product.free_delivery {
            return false;
        }
        true
    }
}

// ============================================================================
// Page Window
// ============================================================================

/// Элемент окна номеров страниц: номер либо маркер пропуска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

// На проводе: номер страницы как число, пропуск как строка "ellipsis"
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

impl<'de> Deserialize<'de> for PageItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(PageItem::Page(n as usize)),
            Raw::Text(s) if s == "ellipsis" => Ok(PageItem::Ellipsis),
            Raw::Text(s) => Err(D::Error::custom(format!(
                "неизвестный элемент окна страниц: {}",
                s
            ))),
        }
    }
}

/// Страница списка вместе с окном номеров для навигации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWindow<T> {
    pub items: Vec<T>,

    #[serde(rename = "pageNumbers")]
    pub page_numbers: Vec<PageItem>,

    #[serde(rename = "currentPage")]
    pub current_page: usize,

    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}
