//! Archive toolbar mappings and the offline sample set.

use risalo_api_models::{CoupletItem, PoetRef, TimelineEra};

use crate::core::display::display_field;
use crate::i18n::LocaleCode;

/// Sort choices offered by the archive toolbar: sort key, then label key.
pub const SORT_CHOICES: [(&str, &str); 3] = [
    ("created_at", "archive.sort_newest"),
    ("likes", "archive.sort_likes"),
    ("views", "archive.sort_views"),
];

/// Maps a sort select value back to its static key; unknown values fall
/// back to newest-first.
#[must_use]
pub fn sort_key_from_value(value: &str) -> &'static str {
    SORT_CHOICES
        .iter()
        .map(|&(key, _)| key)
        .find(|key| *key == value)
        .unwrap_or("created_at")
}

/// Era option label: localized title plus its year span.
#[must_use]
pub fn era_label(era: &TimelineEra, locale: LocaleCode) -> String {
    let title = display_field(era, locale);
    era.end_year.map_or_else(
        || format!("{title} ({}\u{2013})", era.start_year),
        |end| format!("{title} ({}\u{2013}{end})", era.start_year),
    )
}

/// Couplets shown when the archive has never managed to load. Taken from
/// Shah jo Risalo, so the page demonstrates all three text layers offline.
#[must_use]
pub fn sample_couplets() -> Vec<CoupletItem> {
    let shah = PoetRef {
        id: 1,
        slug: "shah-abdul-latif".to_string(),
        sindhi_name: "شاهه عبداللطيف ڀٽائي".to_string(),
        english_name: "Shah Abdul Latif Bhittai".to_string(),
    };
    let couplet = |id: u64, sindhi: &str, roman: &str, english: &str| CoupletItem {
        id,
        poetry_id: None,
        sindhi_text: sindhi.to_string(),
        roman_text: Some(roman.to_string()),
        english_text: Some(english.to_string()),
        poet: Some(shah.clone()),
        likes: 0,
        views: 0,
        created_at: None,
    };
    vec![
        couplet(
            1,
            "جي تو بيت ڀانئيا، سي آيتون آهين\nنيو من لائين، پريان سندي پار ڏي",
            "Je to bait bhaanyaa, se aayatoon aahin\nNeo man laaeen, piryaan sande paar dde",
            "What you took for verses are signs divine\nThey carry the heart to the Beloved's shore",
        ),
        couplet(
            2,
            "سائينم سدائين ڪرين مٿي سنڌ سڪار\nدوست مٺا دلدار عالم سڀ آباد ڪرين",
            "Saaeenm sadaaeen karein mathe Sindh sukaar\nDost mitha dildaar aalam sabh aabaad karein",
            "Lord, keep Sindh forever in plenty\nSweet beloved, let the whole world prosper",
        ),
        couplet(
            3,
            "وڳر ڪيو وتن، پرت نه ڇنن پاڻ ۾\nپسو پکيئڙن، ماڻهن کان ميٺ گهڻو",
            "Waggar kayo watan, pirat na chhinan paann mein\nPaso pakhee'arran, maanhan khaan meetth ghanno",
            "The birds move in flocks, never breaking their bond\nSee the birds, sweeter in friendship than men",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{era_label, sample_couplets, sort_key_from_value};
    use crate::i18n::LocaleCode;
    use risalo_api_models::TimelineEra;

    #[test]
    fn sample_couplets_carry_all_three_text_layers() {
        let samples = sample_couplets();
        assert!(!samples.is_empty());
        for couplet in &samples {
            assert!(couplet.sindhi_text.contains('\n'));
            assert!(couplet.roman_text.is_some());
            assert!(couplet.english_text.is_some());
            assert!(couplet.poet.is_some());
        }
    }

    #[test]
    fn era_label_shows_span_and_open_end() {
        let mut era = TimelineEra {
            id: 1,
            slug: "classical".to_string(),
            start_year: 1689,
            end_year: Some(1752),
            sindhi_title: "ڪلاسيڪي دور".to_string(),
            english_title: "Classical era".to_string(),
        };
        assert_eq!(
            era_label(&era, LocaleCode::En),
            "Classical era (1689\u{2013}1752)"
        );
        era.end_year = None;
        assert_eq!(
            era_label(&era, LocaleCode::Sd),
            "ڪلاسيڪي دور (1689\u{2013})"
        );
    }

    #[test]
    fn unknown_sort_values_fall_back_to_newest() {
        assert_eq!(sort_key_from_value("likes"), "likes");
        assert_eq!(sort_key_from_value("views"), "views");
        assert_eq!(sort_key_from_value("alphabet"), "created_at");
    }
}
