//! End-to-end tests for the packer.
//!
//! Covers the complete workflow:
//! 1. Lay out a source tree on disk
//! 2. Pack it into a generated module
//! 3. Check the artifact is valid Rust
//! 4. Rebuild the store from the collected entries and read the bytes back

use std::fs;
use std::path::Path;

use embedfs_codegen::{PackConfig, Packer, walker};
use embedfs_vfs::{EmbedFs, StoreBuilder};
use tempfile::TempDir;

/// Deterministic filler for binary fixtures, no RNG dependency needed.
fn patterned_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// Builds a tree with a text file, a nested binary blob, and an empty dir.
fn sample_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello world").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.bin"), patterned_bytes(10 * 1024)).unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    dir
}

fn packer_for(dir: &TempDir) -> Packer {
    Packer::new(PackConfig::new(dir.path().join("embedded.rs"))).unwrap()
}

/// The artifact must be a syntactically valid Rust module.
#[test]
fn test_artifact_parses_as_rust() {
    let dir = sample_tree();
    let output = packer_for(&dir).run().unwrap();

    let parsed = syn::parse_file(&output.artifact);
    assert!(parsed.is_ok(), "artifact failed to parse: {parsed:?}");
}

/// Two independent packers over the same tree emit identical bytes.
#[test]
fn test_independent_runs_are_byte_identical() {
    let dir = sample_tree();
    let first = packer_for(&dir).run().unwrap();
    let second = packer_for(&dir).run().unwrap();
    assert_eq!(first.artifact, second.artifact);
}

/// A previously generated module sitting inside the tree is not re-embedded.
#[test]
fn test_previous_artifact_is_excluded_from_next_run() {
    let dir = sample_tree();
    let first = packer_for(&dir).run().unwrap();
    fs::write(dir.path().join("embedded.rs"), &first.artifact).unwrap();

    let second = packer_for(&dir).run().unwrap();
    assert!(!second.artifact.contains("\"/embedded.rs\""));
    assert_eq!(second.stats.files_total, first.stats.files_total);
    assert!(syn::parse_file(&second.artifact).is_ok());
}

/// Disabling embedding still yields a compilable module with an empty store.
#[test]
fn test_scaffolding_without_embedding_parses() {
    let dir = sample_tree();
    let config = PackConfig::new(dir.path().join("embedded.rs")).with_embed(false);
    let output = Packer::new(config).unwrap().run().unwrap();

    assert!(syn::parse_file(&output.artifact).is_ok());
    assert!(!output.artifact.contains(".file("));
    assert_eq!(output.stats.files_total, 0);
}

/// Collected entries rebuild into a store that serves the original bytes,
/// in embedded mode and again through the local detour.
#[test]
fn test_packed_entries_round_trip_through_store() {
    let dir = sample_tree();
    let target = dir.path().join("embedded.rs");
    let entries = walker::collect_entries(dir.path(), &target).unwrap();

    let mut builder = StoreBuilder::new();
    for entry in &entries {
        builder = if entry.is_dir {
            builder.dir(&entry.path, entry.mode)
        } else {
            builder.file(&entry.path, entry.size, entry.mode, &entry.token)
        };
    }
    let fs = EmbedFs::new(builder.build().unwrap());

    assert_embedded_matches_disk(&fs, dir.path(), "/a.txt");
    assert_embedded_matches_disk(&fs, dir.path(), "/sub/b.bin");

    fs.set_local(dir.path());
    assert_eq!(fs.read_file("/a.txt").unwrap(), b"hello world");
    assert_eq!(
        fs.read_file("/sub/b.bin").unwrap(),
        patterned_bytes(10 * 1024)
    );
}

fn assert_embedded_matches_disk(fs: &EmbedFs, root: &Path, logical: &str) {
    let on_disk = std::fs::read(root.join(&logical[1..])).unwrap();
    assert_eq!(fs.read_file(logical).unwrap(), on_disk, "mismatch at {logical}");
}

/// Stats reflect the tree: file count, directory count, raw byte total.
#[test]
fn test_stats_match_tree_contents() {
    let dir = sample_tree();
    let output = packer_for(&dir).run().unwrap();

    assert_eq!(output.stats.files_total, 2);
    // Root, sub, and empty.
    assert_eq!(output.stats.dirs_total, 3);
    assert_eq!(output.stats.bytes_total, 11 + 10 * 1024);
    assert!(output.stats.bytes_embedded > 0);
}
