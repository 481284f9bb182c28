use crate::core::ResolvedCard;
use html_escape::encode_text;

pub const PAGE_TITLE: &str = "Daily Motivation - Flashcards";

pub fn render_index(resolved: &ResolvedCard) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; display: flex; justify-content: center; margin-top: 4rem; background: #f5f5f0; }}
    .card {{ max-width: 36rem; padding: 2rem; background: #fff; border-radius: 12px; box-shadow: 0 2px 8px rgba(0,0,0,.1); }}
    .date {{ color: #666; font-size: .9rem; }}
    .text {{ font-size: 1.5rem; margin: 1.5rem 0 .75rem; }}
    .translation {{ color: #444; font-style: italic; }}
  </style>
</head>
<body>
  <main class="card">
    <p class="date">{date} &middot; Day {day_of_year}</p>
    <p class="text">{text}</p>
    <p class="translation">{translation}</p>
  </main>
</body>
</html>
"#,
        title = PAGE_TITLE,
        date = encode_text(&resolved.label()),
        day_of_year = resolved.day_of_year(),
        text = encode_text(&resolved.card.text),
        translation = encode_text(&resolved.card.translation),
    )
}
