//! Translation completeness guard.
//!
//! - every `t!("...")` key used under `src/` exists in the fallback (es-ES) bundle;
//! - every other locale defines every fallback key;
//! - no bundle defines a key twice.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "jcstudios_ui.ftl";
const FALLBACK: &str = "es-ES";

/// Message IDs defined in a Fluent file (lines of the form `id = ...`).
/// Comments, terms (`-` prefix), attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(' ') && !line.starts_with('\t'))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| {
            let (id, _) = line.split_once('=')?;
            let id = id.trim();
            (!id.is_empty() && id.chars().all(valid_key_char)).then(|| id.to_string())
        })
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!("...")` in Rust sources under `root`.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = "t!(\"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .expect("i18n directory readable")
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_bundle(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path:?}: {err}"))
}

#[test]
fn source_keys_exist_in_fallback() {
    let fallback: HashSet<String> = parse_ftl_keys(&read_bundle(FALLBACK)).into_iter().collect();
    assert!(!fallback.is_empty(), "fallback bundle has no keys");

    let referenced = referenced_keys(&crate_root().join("src"));
    assert!(referenced.contains("nav-inicio"), "key scan found nothing");

    let mut missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_locale_has_every_fallback_key() {
    let fallback: BTreeSet<String> = parse_ftl_keys(&read_bundle(FALLBACK)).into_iter().collect();
    let locales = locale_dirs(&crate_root().join("i18n"));
    assert!(locales.iter().any(|l| l == FALLBACK));

    let mut failures = Vec::new();
    for locale in locales.iter().filter(|l| *l != FALLBACK) {
        let keys: BTreeSet<String> = parse_ftl_keys(&read_bundle(locale)).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing:\n  {}", missing.join("\n  ")));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn bundles_have_no_duplicate_keys() {
    for locale in locale_dirs(&crate_root().join("i18n")) {
        let mut seen = HashSet::new();
        let dups: BTreeSet<String> = parse_ftl_keys(&read_bundle(&locale))
            .into_iter()
            .filter(|k| !seen.insert(k.clone()))
            .collect();
        assert!(dups.is_empty(), "duplicate keys in {locale}: {dups:?}");
    }
}
