// Test fixtures with known book texts and expected outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Narration mixed with hyphen and em dash dialog
pub const SIMPLE_BOOK: &str = "Hello.\n-Hi there-\n\n—Bye—\n";

/// Expected dialog file for SIMPLE_BOOK
pub const SIMPLE_DIALOGS: &str = "-Hi there-\n—Bye—";

/// Book in the Russian typographic convention: em dash opens a line and
/// separates the author's words
pub const NOVEL_BOOK: &str = r#"Глава первая

Он вошёл в комнату и огляделся.
— Здравствуйте, — сказал он.
— Добрый вечер! — ответила она. — Садитесь.
   — Спасибо.
Она молча кивнула.
– Ещё чаю? – спросила хозяйка.
"#;

/// Expected dialog file for NOVEL_BOOK
pub const NOVEL_DIALOGS: &str = r#"— Здравствуйте, —
— Добрый вечер! — ответила она. —
— Спасибо.
– Ещё чаю? –"#;

/// Book without any dialog line
pub const NARRATION_BOOK: &str = "It was a dark night.\nNobody spoke - not even the dog.\n";
