//! Quick-add form state for the romaniser dictionaries.

use risalo_api_models::{HesudharUpsert, RomanWordUpsert};

/// Inline form for a new lexicon word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFormState {
    /// Word in Sindhi script.
    pub word_sd: String,
    /// Latin-script transliteration.
    pub word_roman: String,
}

impl WordFormState {
    /// Convert the form into a create payload.
    ///
    /// # Errors
    /// Returns an error when a field is blank or the Roman form carries
    /// non-Latin characters.
    pub fn to_upsert(&self) -> Result<RomanWordUpsert, String> {
        let word_sd = self.word_sd.trim();
        let word_roman = self.word_roman.trim();
        if word_sd.is_empty() || word_roman.is_empty() {
            return Err("Both the Sindhi word and its Roman form are required".to_string());
        }
        if !word_roman.is_ascii() {
            return Err("Roman form must use Latin letters only".to_string());
        }
        Ok(RomanWordUpsert {
            word_sd: word_sd.to_string(),
            word_roman: word_roman.to_string(),
        })
    }
}

/// Inline form for a new hesudhar spelling correction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleFormState {
    /// Frequently seen misspelling.
    pub incorrect: String,
    /// Canonical spelling it should be replaced with.
    pub correct: String,
}

impl RuleFormState {
    /// Convert the form into a create payload.
    ///
    /// # Errors
    /// Returns an error when a field is blank or both spellings match.
    pub fn to_upsert(&self) -> Result<HesudharUpsert, String> {
        let incorrect = self.incorrect.trim();
        let correct = self.correct.trim();
        if incorrect.is_empty() || correct.is_empty() {
            return Err("Both spellings are required".to_string());
        }
        if incorrect == correct {
            return Err("Corrected spelling must differ from the misspelling".to_string());
        }
        Ok(HesudharUpsert {
            incorrect: incorrect.to_string(),
            correct: correct.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_form_trims_and_builds() {
        let form = WordFormState {
            word_sd: " سنڌ ".to_string(),
            word_roman: " sindh ".to_string(),
        };
        let body = form.to_upsert().expect("payload should build");
        assert_eq!(body.word_sd, "سنڌ");
        assert_eq!(body.word_roman, "sindh");
    }

    #[test]
    fn word_form_rejects_blank_and_non_latin_roman() {
        let blank = WordFormState {
            word_sd: "سنڌ".to_string(),
            word_roman: "  ".to_string(),
        };
        assert!(blank.to_upsert().is_err());

        let wrong_script = WordFormState {
            word_sd: "سنڌ".to_string(),
            word_roman: "سنڌ".to_string(),
        };
        let err = wrong_script.to_upsert().expect_err("script should fail");
        assert!(err.contains("Latin"));
    }

    #[test]
    fn rule_form_requires_distinct_spellings() {
        let same = RuleFormState {
            incorrect: "سنده".to_string(),
            correct: "سنده".to_string(),
        };
        assert!(same.to_upsert().is_err());

        let form = RuleFormState {
            incorrect: " سنده ".to_string(),
            correct: "سنڌ".to_string(),
        };
        let body = form.to_upsert().expect("payload should build");
        assert_eq!(body.incorrect, "سنده");
        assert_eq!(body.correct, "سنڌ");
    }
}
