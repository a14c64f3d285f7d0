//! Property-based tests for manifest parsing and serialization

use md5tree::manifest::{parse_line, parse_manifest, serialize_manifest, ManifestEntry, ParsedLine};
use md5tree::types::Digest;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// File names the writer can represent: no separators, no line breaks and no
/// surrounding whitespace.
fn filename() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]([A-Za-z0-9_. -]{0,20}[A-Za-z0-9_.-])?"
}

fn entries() -> impl Strategy<Value = Vec<ManifestEntry>> {
    prop::collection::btree_set(filename(), 0..16).prop_flat_map(|names: BTreeSet<String>| {
        let names: Vec<String> = names.into_iter().collect();
        let count = names.len();
        prop::collection::vec(any::<[u8; 16]>(), count).prop_map(move |digests| {
            names
                .iter()
                .zip(digests)
                .map(|(name, bytes)| ManifestEntry::new(name.clone(), Digest::from_bytes(bytes)))
                .collect()
        })
    })
}

fn parsed_entries(text: &str) -> Vec<ManifestEntry> {
    parse_manifest(text)
        .into_iter()
        .filter_map(|line| match line.parsed {
            ParsedLine::Entry(entry) => Some(entry),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn serialized_manifest_reparses_to_same_text(entries in entries()) {
        let text = serialize_manifest(&entries);
        let reparsed = parsed_entries(&text);
        prop_assert_eq!(reparsed.len(), entries.len());
        prop_assert_eq!(serialize_manifest(&reparsed), text);
    }

    #[test]
    fn serialization_ignores_input_order(mut entries in entries()) {
        let forward = serialize_manifest(&entries);
        entries.reverse();
        prop_assert_eq!(serialize_manifest(&entries), forward);
    }

    #[test]
    fn parse_line_never_panics(line in "\\PC{0,80}") {
        let _ = parse_line(&line);
    }

    #[test]
    fn valid_entries_survive_surrounding_garbage(entries in entries(), garbage in "[g-z ]{1,10}") {
        let text = serialize_manifest(&entries);
        let noisy = format!("{}\n# comment\n\n{}", garbage, text);
        prop_assert_eq!(parsed_entries(&noisy), parsed_entries(&text));
    }
}
