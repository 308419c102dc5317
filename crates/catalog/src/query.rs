use contracts::domain::category::EnrichedCategory;
use contracts::domain::listing::FilterCriteria;
use contracts::domain::product::ProductRecord;
use contracts::enums::sort_key::SortKey;

/// Trait для типов, по которым умеет работать движок выборки:
/// и голая карточка, и обогащённая категория фильтруются по товару
pub trait CatalogItem {
    fn product(&self) -> &ProductRecord;
}

impl CatalogItem for ProductRecord {
    fn product(&self) -> &ProductRecord {
        self
    }
}

impl CatalogItem for EnrichedCategory {
    fn product(&self) -> &ProductRecord {
        &self.product
    }
}

/// Отфильтровать и упорядочить список товаров.
///
/// Фильтр — конъюнкция активных критериев; пустой критерий пропускает всё,
/// поэтому снятие всех флажков возвращает полный список. Вход всегда полный
/// нефильтрованный список: критерии не накладываются инкрементально, иначе
/// при переключении нескольких контролов подряд накапливаются устаревшие
/// срезы. Сортировка применяется после фильтрации и стабильна: равные ключи
/// сохраняют взаимный порядок входа, `relevance` не переставляет ничего.
pub fn query<T: CatalogItem + Clone>(
    records: &[T],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<T> {
    let mut result: Vec<T> = records
        .iter()
        .filter(|r| criteria.matches(r.product()))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Relevance => {}
        SortKey::Name => result.sort_by(|a, b| {
            a.product()
                .name
                .to_lowercase()
                .cmp(&b.product().name.to_lowercase())
        }),
        SortKey::PriceLow => {
            result.sort_by(|a, b| a.product().price.total_cmp(&b.product().price))
        }
        SortKey::PriceHigh => {
            result.sort_by(|a, b| a.product().price.total_cmp(&b.product().price).reverse())
        }
    }

    result
}
