// src/core/signature.rs
use crate::core::types::Signature;

/// Symbol emitted for any character that is not an ASCII letter.
pub const NON_LETTER: char = ' ';

/// Maps a word to its keypad signature.
///
/// Letters are case-insensitive. Every other character becomes a space, so the
/// signature always has as many characters as the word. Total over all input:
/// the empty word encodes to the empty signature.
pub fn encode(word: &str) -> Signature {
    word.chars().map(key_for).collect::<String>().into()
}

/// The keypad digit carrying `c`, or a space for non-letters.
pub fn key_for(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' | 'b' | 'c' => '2',
        'd' | 'e' | 'f' => '3',
        'g' | 'h' | 'i' => '4',
        'j' | 'k' | 'l' => '5',
        'm' | 'n' | 'o' => '6',
        'p' | 'q' | 'r' | 's' => '7',
        't' | 'u' | 'v' => '8',
        'w' | 'x' | 'y' | 'z' => '9',
        _ => NON_LETTER,
    }
}

/// Slot of a keypad digit among a trie node's eight children.
pub(crate) fn child_slot(digit: u8) -> Option<usize> {
    match digit {
        b'2'..=b'9' => Some(usize::from(digit - b'2')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_known_words() {
        assert_eq!(encode("home").as_str(), "4663");
        assert_eq!(encode("gone").as_str(), "4663");
        assert_eq!(encode("good").as_str(), "4663");
        assert_eq!(encode("Hello").as_str(), "43556");
        assert_eq!(encode("Book").as_str(), "2665");
        assert_eq!(encode("world").as_str(), "96753");
    }

    #[test]
    fn empty_word_has_empty_signature() {
        assert!(encode("").is_empty());
    }

    #[test]
    fn non_letters_become_spaces() {
        let expected = format!("{}2{}23", " ".repeat(4), " ".repeat(16));
        assert_eq!(encode("1010a1234567890[;./'[bf").as_str(), expected);
        assert_eq!(encode("can't").as_str(), "226 8");
        assert_eq!(encode("é").as_str(), " ");
    }

    #[test]
    fn child_slots_cover_keypad() {
        assert_eq!(child_slot(b'2'), Some(0));
        assert_eq!(child_slot(b'9'), Some(7));
        assert_eq!(child_slot(b'1'), None);
        assert_eq!(child_slot(b' '), None);
    }

    proptest! {
        #[test]
        fn lowercase_words_encode_to_digits(word in "[a-z]{0,24}") {
            let sig = encode(&word);
            prop_assert_eq!(sig.len(), word.len());
            prop_assert!(sig.as_str().chars().all(|c| ('2'..='9').contains(&c)));
        }

        #[test]
        fn every_position_maps_one_to_one(word in "[a-zA-Z0-9 '.-]{0,24}") {
            let sig = encode(&word);
            prop_assert_eq!(sig.as_str().chars().count(), word.chars().count());
            for (c, s) in word.chars().zip(sig.as_str().chars()) {
                if c.is_ascii_alphabetic() {
                    prop_assert!(('2'..='9').contains(&s));
                } else {
                    prop_assert_eq!(s, NON_LETTER);
                }
            }
        }
    }
}
