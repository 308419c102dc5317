use anyhow::{Context, Result};
use contracts::domain::feed::{CategoryEntry, CategoryFeed, NormalizedCategory};

/// Разобрать сырой ответ сервиса категорий
pub fn parse_feed(body: &str) -> Result<CategoryFeed> {
    serde_json::from_str(body).context("не удалось разобрать ответ сервиса категорий")
}

/// Нормализовать записи фида к `{ name, link_ref }`.
///
/// Строка берётся как название, у объекта явный `slug` выигрывает, иначе
/// название слагифицируется. Некорректные записи (не строка и не объект,
/// объект без `name`) молча отбрасываются с записью в лог — в отличие от
/// [`crate::enrich`], этот слой работает с недоверенным входом.
pub fn normalize_feed(feed: &CategoryFeed) -> Vec<NormalizedCategory> {
    feed.categories
        .iter()
        .filter_map(|entry| match entry {
            CategoryEntry::Name(name) => Some(NormalizedCategory {
                name: name.clone(),
                link_ref: slugify(name),
            }),
            CategoryEntry::Object {
                name: Some(name),
                slug,
            } => Some(NormalizedCategory {
                name: name.clone(),
                link_ref: slug
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| slugify(name)),
            }),
            CategoryEntry::Object { name: None, .. } => {
                tracing::warn!("запись категории без поля name пропущена");
                None
            }
            CategoryEntry::Other(value) => {
                tracing::warn!("некорректная запись категории пропущена: {}", value);
                None
            }
        })
        .collect()
}

/// Категории из сырого ответа; любой сбой схлопывается в пустой список.
///
/// Пустой список — документированное деградированное состояние витрины,
/// запасного захардкоженного набора категорий нет.
pub fn categories_from_body(body: &str) -> Vec<NormalizedCategory> {
    match parse_feed(body) {
        Ok(feed) => normalize_feed(&feed),
        Err(e) => {
            tracing::warn!("сервис категорий недоступен или ответ битый: {e:#}");
            Vec::new()
        }
    }
}

/// Слаг из названия: нижний регистр, пробелы в подчёркивания, `&` и `/` долой
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace(['&', '/'], "")
}
