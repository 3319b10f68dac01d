use std::fs;
use std::sync::Arc;
use std::thread;

use t9_core::dictionary::load_words;
use t9_core::persistence::{load_snapshot, save_snapshot};
use t9_core::{Index, KeypadCommand, Lookup, Strategy, TypingSession};

const WORDS: &str = "home\ngone\ngood\nhood\nhoof\nin\nit's\nGo\nbook\ncool\n";

fn load(dir: &tempfile::TempDir) -> Vec<String> {
    let path = dir.path().join("words");
    fs::write(&path, WORDS).unwrap();
    load_words(&path).unwrap()
}

fn press(session: &mut TypingSession, keys: &str) {
    for key in keys.chars() {
        if let Some(command) = KeypadCommand::from_key(key) {
            session.apply(command);
        }
    }
}

#[test]
fn types_a_sentence_from_a_loaded_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let words = load(&dir);
    assert_eq!(words.len(), 9);

    let mut session = TypingSession::new(Arc::new(Index::build(Strategy::Trie, words)));
    let renders = session.subscribe_channel();

    // "good" is the second 4663 word in order: gone, good, home, hood
    press(&mut session, "4663*0");
    press(&mut session, "2665*0");
    assert_eq!(session.committed_words(), ["good", "cool"]);
    assert_eq!(session.text(), "good cool");

    press(&mut session, "46");
    assert_eq!(session.text(), "good cool go");

    let last = renders.try_iter().last().unwrap();
    assert_eq!(&*last.text, "good cool go");

    // undo: two deletes clear the digits, the third reopens "cool"
    press(&mut session, "###");
    assert_eq!(session.typed_signature().as_str(), "2665");
    assert_eq!(session.committed_words(), ["good"]);
    assert_eq!(session.text(), "good book");
}

#[test]
fn snapshot_serves_sessions_like_a_fresh_build() {
    let dir = tempfile::tempdir().unwrap();
    let words = load(&dir);
    let path = dir.path().join("cache").join("trie.bin");
    save_snapshot(&Index::build(Strategy::Trie, &words), &path).unwrap();

    let fresh = Index::build(Strategy::Trie, &words);
    let restored = load_snapshot(&path).unwrap();
    for q in ["4", "46", "466", "4663", "2665", "9"] {
        assert_eq!(restored.query(q), fresh.query(q), "{q}");
    }
}

#[test]
fn one_index_serves_sessions_on_many_threads() {
    let dir = tempfile::tempdir().unwrap();
    let index: Arc<dyn Lookup> = Arc::new(Index::build(Strategy::Hashed, load(&dir)));

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let mut session = TypingSession::new(index);
                press(&mut session, "4663");
                for _ in 0..n {
                    session.cycle();
                }
                session.commit();
                session.committed_words().to_vec()
            })
        })
        .collect();

    let committed: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(committed, [["gone"], ["good"], ["home"], ["hood"]]);
}
