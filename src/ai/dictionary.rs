/// English phrase → Urdu phrase.
///
/// Covers the canned summary text the offline summarizer demo produced and
/// every user-facing message the API can return, so error messages can be
/// localized without a network call.
pub const URDU_PHRASES: &[(&str, &str)] = &[
    (
        "This is a simulated AI summary of the provided blog content. It highlights the main points and gives a brief overview. For a real summary, integrate with a powerful LLM like Gemini.",
        "یہ فراہم کردہ بلاگ مواد کا ایک فرضی AI خلاصہ ہے۔ یہ اہم نکات کو اجاگر کرتا ہے اور ایک مختصر جائزہ پیش کرتا ہے۔ حقیقی خلاصے کے لیے، جیمنی جیسے طاقتور LLM کے ساتھ مربوط کریں۔",
    ),
    (
        "This is a simulated summary of the blog content.",
        "یہ بلاگ کے مواد کا ایک فرضی خلاصہ ہے۔",
    ),
    (
        "It highlights the main points and gives a brief overview.",
        "یہ اہم نکات کو اجاگر کرتا ہے اور ایک مختصر جائزہ پیش کرتا ہے۔",
    ),
    (
        "The full text would be stored in MongoDB and the summary in Supabase.",
        "مکمل متن MongoDB میں اور خلاصہ Supabase میں محفوظ کیا جائے گا۔",
    ),
    (
        "This is a simulated blog content.",
        "یہ ایک فرضی بلاگ کا مواد ہے۔",
    ),
    (
        "It covers various topics including technology, science, and daily life.",
        "اس میں ٹیکنالوجی، سائنس، اور روزمرہ کی زندگی سمیت مختلف موضوعات شامل ہیں۔",
    ),
    (
        "The goal is to provide a comprehensive overview without being too verbose.",
        "مقصد بہت زیادہ الفاظ استعمال کیے بغیر ایک جامع جائزہ فراہم کرنا ہے۔",
    ),
    (
        "Thank you for using the Blog Summarizer!",
        "بلاگ سمرائزر استعمال کرنے کا شکریہ!",
    ),
    ("URL is required", "URL درکار ہے"),
    ("Please enter a valid URL.", "براہ کرم ایک درست URL درج کریں۔"),
    ("Failed to summarize the blog.", "بلاگ کا خلاصہ کرنے میں ناکامی۔"),
    ("Failed to scrape blog content", "بلاگ کا مواد سکریپ کرنے میں ناکامی"),
    ("Failed to generate AI summary", "AI خلاصہ بنانے میں ناکامی"),
    ("Failed to translate text", "متن کا ترجمہ کرنے میں ناکامی"),
    ("Failed to save full text", "مکمل متن محفوظ کرنے میں ناکامی"),
    ("Failed to save summary", "خلاصہ محفوظ کرنے میں ناکامی"),
    ("Request timed out", "درخواست کا وقت ختم ہو گیا"),
];

/// Replaces every known phrase, longest first so a sentence is never split
/// by one of its own sub-phrases. Unknown text passes through unchanged.
pub fn substitute(text: &str) -> String {
    let mut phrases: Vec<&(&str, &str)> = URDU_PHRASES.iter().collect();
    phrases.sort_by_key(|(english, _)| std::cmp::Reverse(english.len()));

    phrases
        .into_iter()
        .fold(text.to_string(), |acc, (english, urdu)| acc.replace(english, urdu))
}
