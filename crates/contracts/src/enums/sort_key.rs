use serde::{Deserialize, Serialize};

/// Варианты сортировки списка товаров
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// По релевантности — без пересортировки, порядок вставки
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
}

impl SortKey {
    /// Получить код сортировки (значение select-а на витрине)
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "По релевантности",
            SortKey::Name => "По названию",
            SortKey::PriceLow => "Сначала дешёвые",
            SortKey::PriceHigh => "Сначала дорогие",
        }
    }

    /// Получить все варианты сортировки
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Relevance,
            SortKey::Name,
            SortKey::PriceLow,
            SortKey::PriceHigh,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "relevance" => Some(SortKey::Relevance),
            "name" => Some(SortKey::Name),
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            _ => None,
        }
    }
}

impl ToString for SortKey {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_codes() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_code(key.code()), Some(key));
        }
        assert_eq!(SortKey::from_code("price"), None);
        assert_eq!(SortKey::default(), SortKey::Relevance);
    }
}
