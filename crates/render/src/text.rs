//! Text measurement, wrapping and encoding for the standard Helvetica fonts.

/// Millimetres per PDF point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Approximate Helvetica advance width of `c`, in em.
fn advance_em(c: char) -> f32 {
    match c {
        ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '!' | '\'' | '|' | 'I' => 0.278,
        'f' | 't' | 'r' | '(' | ')' | '-' | '/' | '[' | ']' => 0.333,
        'm' | 'M' | 'W' => 0.833,
        'w' | '@' | '%' => 0.778,
        '0'..='9' | '#' | '$' | '_' => 0.556,
        'A'..='Z' => 0.667,
        _ => 0.5,
    }
}

/// Estimated width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().map(advance_em).sum::<f32>() * size * PT_TO_MM
}

/// Break `text` into lines no wider than `max_width_mm`.
///
/// Explicit line breaks are kept (blank lines included). Words are packed
/// greedily; a single word wider than the limit is split between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width_mm(&candidate, size) <= max_width_mm {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                current.push(c);
                if text_width_mm(&current, size) > max_width_mm && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Encode `text` for a WinAnsi-encoded standard font.
///
/// Characters the encoding lacks become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("12 Race Course Road", 80.0, 11.0), vec!["12 Race Course Road"]);
    }

    #[test]
    fn explicit_breaks_are_kept() {
        assert_eq!(
            wrap_text("Flat 4\n\nCoimbatore", 80.0, 11.0),
            vec!["Flat 4", "", "Coimbatore"]
        );
    }

    #[test]
    fn long_address_wraps_within_width() {
        let address = "Door No. 14/2, Third Cross Street, Gandhipuram Extension, \
                       Near Central Bus Terminus, Coimbatore, Tamil Nadu 641012";
        let lines = wrap_text(address, 80.0, 11.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 11.0) <= 80.0, "too wide: {line}");
        }
        assert_eq!(lines.join(" "), address.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn overlong_word_is_split() {
        let word = "X".repeat(60);
        let lines = wrap_text(&word, 30.0, 11.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn win_ansi_maps_bullets_and_replaces_unknowns() {
        assert_eq!(win_ansi("• ok"), vec![0x95, b' ', b'o', b'k']);
        assert_eq!(win_ansi("₹70"), b"?70".to_vec());
        assert_eq!(win_ansi("café"), vec![b'c', b'a', b'f', 0xe9]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: wrapping never drops words of ordinary text.
        #[test]
        fn wrapping_keeps_every_word(words in prop::collection::vec("[a-zA-Z0-9,]{1,12}", 0..30)) {
            let text = words.join(" ");
            let wrapped = wrap_text(&text, 80.0, 11.0).join(" ");
            prop_assert_eq!(
                wrapped.split_whitespace().collect::<Vec<_>>(),
                text.split_whitespace().collect::<Vec<_>>()
            );
        }
    }
}
