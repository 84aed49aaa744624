use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Best-effort language hint for extracted article text.
///
/// The translator prompt assumes English input, so the pipeline only logs a
/// warning when this returns something else. Short or ambiguous text yields
/// `None`.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return None;
    }

    let info = detect(text)?;
    if info.confidence() < MIN_CONFIDENCE {
        return None;
    }
    Some(iso_639_1(info.lang()))
}

fn iso_639_1(lang: Lang) -> String {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Urd => "ur",
        Lang::Hin => "hi",
        Lang::Ara => "ar",
        Lang::Pes => "fa",
        Lang::Pan => "pa",
        Lang::Ben => "bn",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Tur => "tr",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        // whatlang only knows ISO 639-3 for the long tail
        other => other.code(),
    };
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        let text = "This is a test of the English language detection system. It should work well.";
        assert_eq!(detect_language(text), Some("en".to_string()));
    }

    #[test]
    fn test_detect_urdu() {
        let text = "یہ بلاگ کے مواد کا ایک خلاصہ ہے۔ یہ اہم نکات کو اجاگر کرتا ہے اور ایک مختصر جائزہ پیش کرتا ہے۔";
        assert_eq!(detect_language(text), Some("ur".to_string()));
    }

    #[test]
    fn test_short_text_returns_none() {
        assert_eq!(detect_language("Short"), None);
    }

    #[test]
    fn test_symbols_return_none() {
        let text =
            "1 2 3 4 5 6 7 8 9 0 ! @ # $ % ^ & * ( ) - = + [ ] { } | \\ : ; \" ' < > , . ? /";
        assert_eq!(detect_language(text), None);
    }
}
