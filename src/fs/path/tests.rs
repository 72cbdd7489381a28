#![cfg(test)]

use super::*;
use crate::fs::InvalidArgumentError;

fn path(value: &str) -> Path {
    Path::new(value).expect("test path should be valid")
}

fn forward(value: &str) -> Vec<String> {
    path(value).components().map(str::to_owned).collect()
}

#[test]
fn test_construction_strips_trailing_separators() {
    assert_eq!(path("a/b/").as_str(), "a/b");
    assert_eq!(path("a/b\\/\\").as_str(), "a/b", "Both separators should be stripped.");
    assert_eq!(path("/").as_str(), "/", "A root separator should be preserved.");
    assert_eq!(path("//").as_str(), "/", "Stripping should stop at a single character.");
    assert_eq!(path("\\\\").as_str(), "\\");
    assert_eq!(path("a").as_str(), "a", "A single non-separator should be preserved.");
    assert_eq!(path("").as_str(), "");
    assert_eq!(path("/a//b").as_str(), "/a//b", "Interior separator runs aren't collapsed.");
    assert_eq!(path("./../x").as_str(), "./../x", "Dot components aren't resolved.");
}

#[test]
fn test_construction_rejects_invalid_symbols() {
    assert_eq!(
        Path::new("a\"b"),
        Err(InvalidArgumentError { symbol: '"', index: 1 }),
        "Quotes should be rejected with their position."
    );
    for bad in ["a<b", "a>b", "a|b", "a\nb", "a\0b", "\u{1f}"] {
        assert!(Path::new(bad).is_err(), "{bad:?} should be rejected.");
    }
    assert_eq!(
        Path::new("ü/\t").map_err(|e| e.index),
        Err(3),
        "Index should be a byte offset."
    );
    assert!(Path::new("C:/dir/*?.txt").is_ok(), "File name symbols are allowed in paths.");
    assert!(Path::new(" spaced name/ü").is_ok());
}

#[test]
fn test_no_trailing_separator_property() {
    let inputs = ["a", "a/", "a//", "/a/", "\\a\\", "/", "//", "///", "a/b\\", "x/y/z/"];
    for input in inputs {
        let text = path(input).into_string();
        let collapsed_root = text.len() == 1 && is_separator(text.chars().next().unwrap_or('a'));
        assert!(
            !text.ends_with(is_separator) || collapsed_root,
            "{input:?} normalized to {text:?}, which has a trailing separator."
        );
    }
}

#[test]
fn test_equality_and_parsing() {
    assert_eq!(path("a/b"), path("a/b"));
    assert_eq!(path("a/b/"), path("a/b"), "Equality should be on normalized text.");
    assert_ne!(path("a/b"), path("a\\b"), "Different separators give different text.");
    assert_ne!(path("A"), path("a"), "Equality should be case sensitive.");
    assert_eq!(Path::default(), Path::empty());
    assert!(Path::empty().is_empty() && Path::empty().as_str().is_empty());
    assert_eq!(path("ab/").len(), 2);

    let parsed: Path = "x/y//".parse().expect("should parse");
    assert_eq!(parsed, path("x/y"), "Parsing should normalize like construction.");
    assert!("x|y".parse::<Path>().is_err());
    assert_eq!(path("x/y/").to_string(), "x/y", "Display should render normalized text.");
    assert_eq!(Path::try_from(String::from("q//")), Ok(path("q")));
    assert_eq!(Path::try_from("q<"), Err(InvalidArgumentError { symbol: '<', index: 1 }));
}

#[test]
fn test_join() {
    assert_eq!(path("a").join(&path("b")).as_str(), format!("a{MAIN_SEPARATOR}b"));
    assert_eq!(path("a/").join(&path("b")), path("a").join(&path("b")));
    assert_eq!(
        path("a").join(&path("//b")).as_str(),
        format!("a{MAIN_SEPARATOR}b"),
        "Leading separators of the right side should be skipped."
    );
    assert_eq!(path("a\\").as_str(), "a");
    assert_eq!(path("/").join(&path("b")).as_str(), "/b", "Joining onto a root adds no separator.");
    assert_eq!(
        Path::empty().join(&path("/b")).as_str(),
        "/b",
        "An empty left side should keep the leading separator."
    );
    assert_eq!(path("a").join(&Path::empty()), path("a"), "Joining empty is the identity.");
    assert_eq!(path("a").join(&path("/")), path("a"), "Joining a bare root adds nothing.");
    assert_eq!(Path::empty().join(&Path::empty()), Path::empty());
}

#[test]
fn test_join_properties() {
    let samples = ["a", "a/b", "/x", "\\y\\z", "c:", "..", "ü"];
    for a in samples {
        for b in samples {
            let joined = path(a).join(&path(b));
            let text = joined.as_str();
            assert!(
                !text.contains("//") || a.contains("//") || b.contains("//"),
                "Joining {a:?} and {b:?} doubled a separator: {text:?}"
            );
            assert!(!text.ends_with(is_separator), "Joining {a:?} and {b:?} left a trailing separator.");

            for c in samples {
                assert_eq!(
                    path(a).join(&path(b)).join(&path(c)),
                    path(a).join(&path(b).join(&path(c))),
                    "Join should be associative for {a:?}, {b:?}, {c:?}."
                );
            }
        }
    }
}

#[test]
fn test_push_and_operators() {
    let mut base = path("root");
    base.push(&path("child"));
    base += path("leaf/");
    assert_eq!(base, path("root").join(&path("child")).join(&path("leaf")));

    let sum = &path("a") + &path("b");
    assert_eq!(sum, path("a").join(&path("b")));
    assert_eq!(path("a") + path("b"), sum);
}

#[test]
fn test_components_forward() {
    assert_eq!(forward("a/b/c"), ["a", "b", "c"]);
    assert_eq!(forward("/a//b/"), ["a", "b"], "Separator runs should be collapsed.");
    assert_eq!(forward("\\a/\\b"), ["a", "b"], "Either separator should split components.");
    assert_eq!(forward("C:\\Users\\me"), ["C:", "Users", "me"]);
    assert_eq!(forward("ü/ß"), ["ü", "ß"]);
    assert!(forward("").is_empty());
    assert!(forward("/").is_empty(), "A root has no components.");
    assert_eq!(forward("single"), ["single"]);
}

#[test]
fn test_components_backward_mirrors_forward() {
    for input in ["a/b/c", "/a//b/", "single", "/", "", "\\\\srv\\share\\x", "a/./../b"] {
        let p = path(input);
        let mut backward: Vec<&str> = p.components().rev().collect();
        backward.reverse();
        assert_eq!(
            p.components().collect::<Vec<_>>(),
            backward,
            "Backward iteration of {input:?} should mirror forward iteration."
        );
    }

    let p = path("a/b/c/d");
    let mut iter = p.components();
    assert_eq!(iter.next(), Some("a"));
    assert_eq!(iter.next_back(), Some("d"));
    assert_eq!(iter.next_back(), Some("c"));
    assert_eq!(iter.next(), Some("b"));
    assert_eq!(iter.next(), None, "Both ends should meet without repeating a component.");
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_cursor_stepping() {
    let p = path("/usr//lib/x");
    let mut cursor = p.cursor_front();
    assert_eq!((cursor.pos(), cursor.read()), (1, "usr"));
    cursor.move_next();
    assert_eq!((cursor.pos(), cursor.read()), (6, "lib"));
    cursor.move_next().move_next();
    assert!(cursor.is_end());
    assert_eq!(cursor.read(), "", "The end sentinel should read as empty.");
    assert_eq!(cursor, p.cursor_back());

    cursor.move_next();
    assert!(cursor.is_end(), "Stepping past the end should do nothing.");

    cursor.move_prev();
    assert_eq!((cursor.pos(), cursor.read()), (10, "x"));
    cursor.move_prev().move_prev();
    assert_eq!((cursor.pos(), cursor.read()), (1, "usr"));
    cursor.move_prev();
    assert_eq!(cursor.pos(), 1, "Stepping back from the first component should do nothing.");
    assert_eq!(cursor, p.cursor_front());
}

#[test]
fn test_cursor_backward_reaches_buffer_start() {
    let p = path("a/b");
    let mut cursor = p.cursor_back();
    cursor.move_prev();
    assert_eq!(cursor.read(), "b");
    cursor.move_prev();
    assert_eq!(
        (cursor.pos(), cursor.read()),
        (0, "a"),
        "The first byte of the buffer should be reachable."
    );

    let p = path("ab");
    let mut cursor = p.cursor_back();
    cursor.move_prev();
    assert_eq!((cursor.pos(), cursor.read()), (0, "ab"));

    let p = path("/a");
    let mut cursor = p.cursor_back();
    cursor.move_prev();
    assert_eq!((cursor.pos(), cursor.read()), (1, "a"));
    cursor.move_prev();
    assert_eq!(cursor.pos(), 1, "A leading separator isn't a component.");

    for empty in ["", "/", "\\"] {
        let p = path(empty);
        let mut cursor = p.cursor_back();
        cursor.move_prev();
        assert!(cursor.is_end(), "{empty:?} has nothing to step back to.");
        assert_eq!(p.cursor_front(), p.cursor_back());
    }
}

#[test]
fn test_cursors_are_independent_copies() {
    let p = path("a/b");
    let first = p.cursor_front();
    let mut second = first;
    second.move_next();
    assert_eq!(first.read(), "a", "Moving a copy shouldn't move the original.");
    assert_eq!(second.read(), "b");
    assert_ne!(first, second);
    assert!(first.has_current() && second.has_current());
}

#[test]
fn test_file_name_and_parent() {
    assert_eq!(path("a/b/c").file_name(), Some("c"));
    assert_eq!(path("a/b/c").parent(), Some(path("a/b")));
    assert_eq!(path("a//b").parent(), Some(path("a")));
    assert_eq!(path("/a").parent(), Some(path("/")), "The parent of a rooted name is the root.");
    assert_eq!(path("a").parent(), Some(Path::empty()));
    assert_eq!(path("/").parent(), None);
    assert_eq!(path("/").file_name(), None);
    assert_eq!(Path::empty().file_name(), None);

    let mut walk = Some(path("/x/y/z"));
    let mut seen = Vec::new();
    while let Some(p) = walk {
        seen.push(p.to_string());
        walk = p.parent();
    }
    assert_eq!(seen, ["/x/y/z", "/x/y", "/x", "/"], "Walking parents should end at the root.");
}

const _: () = assert!(is_separator('/') && is_separator('\\') && !is_separator(':'));
const _: () = assert!(is_invalid_file_name_symbol('?') && !is_invalid_path_symbol('?'));

#[test]
fn test_symbol_predicates() {
    for ch in ['"', '<', '>', '|', '\0', '\n', '\u{1f}'] {
        assert!(is_invalid_path_symbol(ch), "{ch:?} is invalid in a path.");
        assert!(is_invalid_file_name_symbol(ch), "{ch:?} is invalid in a file name.");
    }
    for ch in ['/', '\\', ':', '*', '?'] {
        assert!(!is_invalid_path_symbol(ch), "{ch:?} is allowed in a path.");
        assert!(is_invalid_file_name_symbol(ch), "{ch:?} is invalid in a file name.");
    }
    assert!(!is_invalid_file_name_symbol(' '));
    assert!(!is_invalid_file_name_symbol('ü'));
    assert!(is_separator(MAIN_SEPARATOR));
    for byte in 0..=u8::MAX {
        assert_eq!(
            is_separator(char::from(byte)),
            SEPARATORS.contains(&byte),
            "Separator checks should agree with the separator set for {byte:#x}."
        );
    }

    assert_eq!(validate_file_name("notes.txt"), Ok(()));
    assert_eq!(
        validate_file_name("a/b"),
        Err(InvalidArgumentError { symbol: '/', index: 1 })
    );
}
