use contracts::domain::category::{CategoryStub, EnrichedCategory};

use crate::synthesis::synthesize;

/// Обогатить упорядоченный список заготовок синтезированными карточками.
///
/// Порядок входа сохраняется — он же "релевантность" при сортировке по
/// умолчанию. Отсутствующий id подставляется как `index + 1` (именно от
/// индекса, не случайно — иначе карточки "прыгают" между перерисовками).
/// Базовая цена растёт линейно по разделу: `base_price + index * 100`,
/// чтобы у каждой позиции была своя отправная точка.
///
/// Заготовки здесь не валидируются: слой работает с уже выверенными
/// литеральными данными. Пустой `name` пройдёт дальше пустым; отбрасывание
/// мусора — забота нормализации внешнего фида (см. [`crate::feed`]).
pub fn enrich(stubs: &[CategoryStub], class_tag: &str, base_price: f64) -> Vec<EnrichedCategory> {
    stubs
        .iter()
        .enumerate()
        .map(|(index, stub)| {
            let id = stub.id.unwrap_or(index as u32 + 1);
            let product = synthesize(
                id,
                &stub.name,
                &stub.image_ref,
                base_price + index as f64 * 100.0,
                class_tag,
            );
            EnrichedCategory {
                stub: stub.clone(),
                product,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stubs() -> Vec<CategoryStub> {
        vec![
            CategoryStub::new("Brake Pad", "/img/brake_pad.png", "brake_pad"),
            CategoryStub::with_id(10, "Brake Disc", "/img/brake_disc.png", "brake_disc"),
            CategoryStub::new("Brake Shoe", "/img/brake_shoe.png", "brake_shoe"),
        ]
    }

    #[test]
    fn test_order_preserved() {
        let enriched = enrich(&stubs(), "brake", 299.0);
        let names: Vec<&str> = enriched.iter().map(|e| e.stub.name.as_str()).collect();
        assert_eq!(names, vec!["Brake Pad", "Brake Disc", "Brake Shoe"]);
    }

    #[test]
    fn test_id_fallback_round_trip() {
        let stubs = stubs();
        let enriched = enrich(&stubs, "brake", 299.0);
        let ids: Vec<u32> = enriched.iter().map(|e| e.product.id).collect();
        let expected: Vec<u32> = stubs
            .iter()
            .enumerate()
            .map(|(i, s)| s.id.unwrap_or(i as u32 + 1))
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(ids, vec![1, 10, 3]);
    }

    #[test]
    fn test_base_price_stagger() {
        let enriched = enrich(&stubs(), "brake", 299.0);
        // price = (base + index * 100) + id * 100
        assert_eq!(enriched[0].product.price, 299.0 + 0.0 + 100.0);
        assert_eq!(enriched[1].product.price, 299.0 + 100.0 + 1000.0);
        assert_eq!(enriched[2].product.price, 299.0 + 200.0 + 300.0);
    }

    #[test]
    fn test_empty_name_propagates() {
        let stubs = vec![CategoryStub::new("", "/img/unknown.png", "unknown")];
        let enriched = enrich(&stubs, "misc", 100.0);
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].product.name, "");
    }

    #[test]
    fn test_determinism_across_calls() {
        let stubs = stubs();
        assert_eq!(enrich(&stubs, "brake", 299.0), enrich(&stubs, "brake", 299.0));
    }
}
