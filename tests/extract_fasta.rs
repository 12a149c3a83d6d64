//! End-to-end tests for the `extract-fasta` subcommand.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

fn long_sequence() -> String {
    "ACGT".repeat(25)
}

fn reference_fasta() -> String {
    format!(
        ">FBtr0300689 type=mRNA; loc=X:1..100; parent=FBgn0003996,FBgn0003997; ID=FBtr0300689;\n\
         {}\n\
         >FBtr0300690 type=mRNA; loc=X:200..300; parent=FBgn0003996; ID=FBtr0300690;\n\
         GGGGCCCC\n\
         >FBtr0400000 type=mRNA; loc=2L:1..8; parent=FBgn0011111; ID=FBtr0400000;\n\
         TTTTAAAA\n",
        long_sequence()
    )
}

fn write_gzipped_reference(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("dmel-all-transcript.fasta.gz");
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(reference_fasta().as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn write_list(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_gene_id_pulls_every_transcript_wrapped_at_80() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let list = write_list(&dir, "white.txt", "FBgn0003996\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg(&list)
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("white.fasta")).unwrap();
    let sequence = long_sequence();
    let expected = format!(
        ">FBtr0300689 type=mRNA; loc=X:1..100; parent=FBgn0003996,FBgn0003997; ID=FBtr0300689;\n\
         {}\n{}\n\
         >FBtr0300690 type=mRNA; loc=X:200..300; parent=FBgn0003996; ID=FBtr0300690;\n\
         GGGGCCCC\n",
        &sequence[..80],
        &sequence[80..]
    );
    assert_eq!(output, expected);
}

#[test]
fn test_no_wrap_keeps_sequences_on_one_line() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let list = write_list(&dir, "one.txt", "FBtr0300689\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg("--no-wrap")
        .arg(&list)
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("one.fasta")).unwrap();
    assert!(output.contains(&format!("\n{}\n", long_sequence())));
}

#[test]
fn test_line_width_flag_controls_wrapping() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let list = write_list(&dir, "one.txt", "FBtr0300690\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg("--line-width")
        .arg("4")
        .arg(&list)
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("one.fasta")).unwrap();
    assert!(output.ends_with("GGGG\nCCCC\n"));
}

#[test]
fn test_non_accession_lines_ignored() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let list = write_list(
        &dir,
        "noisy.txt",
        "# my favourite genes\nwhite\nFBtr0400000\n\n",
    );

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg(&list)
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("noisy.fasta")).unwrap();
    assert_eq!(output.matches('>').count(), 1);
    assert!(output.contains(">FBtr0400000"));
}

#[test]
fn test_failing_list_does_not_stop_the_next_one() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let bad = write_list(&dir, "bad.txt", "FBgn9999999\n");
    let good = write_list(&dir, "good.txt", "FBtr0400000\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stderr(predicate::str::contains("FBgn9999999"))
        .stderr(predicate::str::contains("1 of 2 ID list(s) failed"));

    // The good list was still processed in full
    let output = fs::read_to_string(dir.path().join("good.fasta")).unwrap();
    assert!(output.contains(">FBtr0400000"));
}

#[test]
fn test_list_without_ids_skipped_without_output_file() {
    let dir = TempDir::new().unwrap();
    let fasta = write_gzipped_reference(&dir);
    let list = write_list(&dir, "empty.txt", "nothing here\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(&fasta)
        .arg("--outdir")
        .arg(dir.path())
        .arg(&list)
        .assert()
        .success();

    assert!(!dir.path().join("empty.fasta").exists());
}

#[test]
fn test_missing_reference_fasta_fails() {
    let dir = TempDir::new().unwrap();
    let list = write_list(&dir, "one.txt", "FBtr0300689\n");

    let mut cmd = Command::cargo_bin("fbtools").unwrap();
    cmd.arg("extract-fasta")
        .arg("--fasta")
        .arg(dir.path().join("no_such.fasta.gz"))
        .arg("--outdir")
        .arg(dir.path())
        .arg(&list)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read FASTA file"));
}
