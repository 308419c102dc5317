use serde::{Deserialize, Serialize};

// ============================================================================
// Category Feed (контракт внешнего сервиса категорий)
// ============================================================================

/// Ответ сервиса категорий.
///
/// Сервис исторически отдаёт записи двух форм: просто строку с названием
/// либо объект с полями `name`/`slug`. Разнобой нормализуется один раз
/// на границе загрузки, дальше по коду ходит только [`NormalizedCategory`].
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFeed {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// Запись категории в сыром виде, как пришла от сервиса
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// Просто название категории
    Name(String),

    /// Объект; `name` может отсутствовать — такая запись отбрасывается
    Object {
        name: Option<String>,
        slug: Option<String>,
    },

    /// Всё остальное (число, массив и т.п.) — некорректная запись
    Other(serde_json::Value),
}

/// Нормализованная категория для витрины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCategory {
    pub name: String,

    #[serde(rename = "linkRef")]
    pub link_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_shapes() {
        let feed: CategoryFeed = serde_json::from_str(
            r#"{"categories": ["Brakes", {"name": "Engine Parts", "slug": "engine"}, 42]}"#,
        )
        .unwrap();
        assert_eq!(feed.categories.len(), 3);
        assert!(matches!(feed.categories[0], CategoryEntry::Name(_)));
        assert!(matches!(feed.categories[1], CategoryEntry::Object { .. }));
        assert!(matches!(feed.categories[2], CategoryEntry::Other(_)));
    }

    #[test]
    fn test_missing_categories_field() {
        let feed: CategoryFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.categories.is_empty());
    }
}
