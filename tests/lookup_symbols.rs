//! End-to-end tests for the `lookup-symbols` subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SYNONYMS: &str = "\
## FlyBase synonym table
## primary_FBid\torganism_abbreviation\tcurrent_symbol\tcurrent_fullname\tfullname_synonym(s)\tsymbol_synonym(s)
FBgn0000001\tDmel\tsymA\tFull Name\tsyn1,syn2\tssyn1, has comma
FBgn0000010\tDmel\tdup\t\t\t
FBgn0000011\tDmel\tdup\t\t\t
FBgn0100001\tDsim\tsimOnly\t\t\t
FBtr0070000\tDmel\tsymA-RA\t\t\t
FBpp0070000\tDmel\tsymA-PA\t\t\t
";

fn write_fixtures(dir: &TempDir, queries: &str) -> (PathBuf, PathBuf) {
    let query_path = dir.path().join("queries.txt");
    let synonym_path = dir.path().join("fb_synonym.tsv");
    fs::write(&query_path, queries).unwrap();
    fs::write(&synonym_path, SYNONYMS).unwrap();
    (query_path, synonym_path)
}

fn run(query_path: &Path, synonym_path: &Path, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("lookup-symbols").arg(query_path).arg(synonym_path);
    for arg in extra {
        cmd.arg(arg);
    }
    cmd.assert()
}

#[test]
fn test_every_alias_column_resolves() {
    let dir = TempDir::new().unwrap();
    let (query_path, synonym_path) = write_fixtures(
        &dir,
        "symA\nFull Name\nsyn1\nsyn2\nssyn1, has comma\n",
    );

    run(&query_path, &synonym_path, &[]).success().stdout(
        "symA\tFBgn0000001\n\
         Full Name\tFBgn0000001\n\
         syn1\tFBgn0000001\n\
         syn2\tFBgn0000001\n\
         ssyn1, has comma\tFBgn0000001\n",
    );
}

#[test]
fn test_shared_symbol_lists_all_ids_sorted() {
    let dir = TempDir::new().unwrap();
    let (query_path, synonym_path) = write_fixtures(&dir, "dup\n");

    run(&query_path, &synonym_path, &[])
        .success()
        .stdout("dup\tFBgn0000010,FBgn0000011\n");
}

#[test]
fn test_unknown_symbol_echoed_bare() {
    let dir = TempDir::new().unwrap();
    let (query_path, synonym_path) = write_fixtures(&dir, "nonesuch\nsymA\n");

    run(&query_path, &synonym_path, &[])
        .success()
        .stdout("nonesuch\nsymA\tFBgn0000001\n");
}

#[test]
fn test_transcript_symbols_resolve_but_protein_rows_do_not() {
    let dir = TempDir::new().unwrap();
    let (query_path, synonym_path) = write_fixtures(&dir, "symA-RA\nsymA-PA\n");

    run(&query_path, &synonym_path, &[])
        .success()
        .stdout("symA-RA\tFBtr0070000\nsymA-PA\n");
}

#[test]
fn test_species_flag_switches_the_index() {
    let dir = TempDir::new().unwrap();
    let (query_path, synonym_path) = write_fixtures(&dir, "simOnly\nsymA\n");

    // Default species is Dmel, so simOnly misses
    run(&query_path, &synonym_path, &[])
        .success()
        .stdout("simOnly\nsymA\tFBgn0000001\n");

    // Under Dsim the situation flips
    run(&query_path, &synonym_path, &["--species", "Dsim"])
        .success()
        .stdout("simOnly\tFBgn0100001\nsymA\n");
}

#[test]
fn test_missing_synonym_file_fails() {
    let dir = TempDir::new().unwrap();
    let query_path = dir.path().join("queries.txt");
    fs::write(&query_path, "symA\n").unwrap();

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("lookup-symbols")
        .arg(&query_path)
        .arg(dir.path().join("no_such_synonyms.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read synonym file"));
}
