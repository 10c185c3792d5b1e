//! Poetry admin helpers: duplicate payloads and table cell text.

use risalo_api_models::{Lang, PoetrySummary, PoetryUpsert, TranslationUpsert};

use crate::core::display::display_field;
use crate::i18n::LocaleCode;

/// Create-request body for a duplicate of `source`.
///
/// The copy gets its own slug and a language-matched title suffix so the
/// two rows stay tellable apart in the table.
#[must_use]
pub fn duplicate_payload(source: &PoetrySummary) -> PoetryUpsert {
    let translations = source
        .translations
        .iter()
        .map(|translation| TranslationUpsert {
            lang: translation.lang,
            title: match translation.lang {
                Lang::Sd => format!("{} (نقل)", translation.title),
                Lang::En => format!("{} (copy)", translation.title),
            },
            source: translation.source.clone(),
        })
        .collect();
    PoetryUpsert {
        slug: format!("{}-copy", source.slug),
        category_id: source.category_id,
        poet_ids: source.poets.iter().map(|poet| poet.id).collect(),
        translations,
        is_featured: false,
    }
}

/// Credited poets joined with the reader script's list separator.
#[must_use]
pub fn poet_names(work: &PoetrySummary, locale: LocaleCode) -> String {
    let separator = match locale {
        LocaleCode::Sd => "\u{60c} ",
        LocaleCode::En => ", ",
    };
    work.poets
        .iter()
        .map(|poet| display_field(poet, locale))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use risalo_api_models::{PoetRef, PoetryTranslation};

    fn sample_work() -> PoetrySummary {
        PoetrySummary {
            id: 9,
            slug: "shah-jo-risalo".to_string(),
            category_id: Some(3),
            poets: vec![
                PoetRef {
                    id: 1,
                    slug: "shah-latif".to_string(),
                    sindhi_name: "شاهه لطيف".to_string(),
                    english_name: "Shah Latif".to_string(),
                },
                PoetRef {
                    id: 2,
                    slug: "sachal".to_string(),
                    sindhi_name: "سچل سرمست".to_string(),
                    english_name: "Sachal Sarmast".to_string(),
                },
            ],
            translations: vec![
                PoetryTranslation {
                    id: 11,
                    lang: Lang::Sd,
                    title: "شاهه جو رسالو".to_string(),
                    source: Some("ڪلياڻ آڏواڻي".to_string()),
                },
                PoetryTranslation {
                    id: 12,
                    lang: Lang::En,
                    title: "Risalo of Shah".to_string(),
                    source: None,
                },
            ],
            is_featured: true,
            ..PoetrySummary::default()
        }
    }

    #[test]
    fn duplicate_payload_suffixes_slug_and_titles() {
        let payload = duplicate_payload(&sample_work());
        assert_eq!(payload.slug, "shah-jo-risalo-copy");
        assert_eq!(payload.translations[0].title, "شاهه جو رسالو (نقل)");
        assert_eq!(payload.translations[1].title, "Risalo of Shah (copy)");
        assert_eq!(payload.translations[0].source.as_deref(), Some("ڪلياڻ آڏواڻي"));
        assert_eq!(payload.poet_ids, vec![1, 2]);
        assert_eq!(payload.category_id, Some(3));
        assert!(!payload.is_featured);
    }

    #[test]
    fn poet_names_join_in_the_reader_script() {
        let work = sample_work();
        assert_eq!(poet_names(&work, LocaleCode::En), "Shah Latif, Sachal Sarmast");
        assert_eq!(
            poet_names(&work, LocaleCode::Sd),
            "شاهه لطيف\u{60c} سچل سرمست"
        );
    }

    #[test]
    fn poet_names_are_empty_for_unattributed_work() {
        let mut work = sample_work();
        work.poets.clear();
        assert_eq!(poet_names(&work, LocaleCode::En), "");
    }
}
