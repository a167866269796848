//! Full menu sessions against a library file in a temp directory.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use mucat::shell::Shell;
use mucat::{Config, DurationPolicy, Library};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn session(path: &Path, policy: DurationPolicy, input: &str) -> (Library, String) {
    let config = Config {
        library_file: path.to_path_buf(),
        duration_policy: policy,
    };
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config);
    shell.load().unwrap();
    shell.run().unwrap();

    let library = shell.library().clone();
    (library, String::from_utf8(shell.into_output()).unwrap())
}

#[test]
fn saved_session_is_loaded_next_time() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.txt");

    let (first, output) = session(
        &path,
        DurationPolicy::Reject,
        "1\nGreatest Hits\n2\n0\nIntro\nAda\nSynth\n1990\n3.5\n8\n9\n",
    );
    assert!(output.starts_with("No previous library.\n"));
    assert!(output.contains("Saved."));

    let (second, output) = session(&path, DurationPolicy::Reject, "9\n");
    assert!(output.starts_with("Loaded.\n"));
    assert_eq!(second, first);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1\nGreatest Hits\n1\nIntro\nAda\nSynth\n1990\n3.5\n"
    );
}

#[test]
fn exit_without_save_keeps_the_old_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.txt");
    fs::write(&path, "1\nKept\n0\n").unwrap();

    let (library, _) = session(&path, DurationPolicy::Reject, "1\nNew\n9\n");

    assert_eq!(library.num_albums(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\nKept\n0\n");
}

#[test]
fn corrupt_file_starts_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.txt");
    fs::write(&path, "two\n").unwrap();

    let (library, output) = session(&path, DurationPolicy::Reject, "9\n");

    assert!(library.is_empty());
    assert!(output.contains("Malformed library file at line 1"));
    assert!(output.contains("Starting with an empty library."));
}

#[test]
fn sixth_album_is_refused() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.txt");

    let (library, output) = session(
        &path,
        DurationPolicy::Reject,
        "1\nA\n1\nB\n1\nC\n1\nD\n1\nE\n1\nF\n9\n",
    );

    assert_eq!(output.matches("Album added.").count(), 5);
    assert!(output.contains("The library is full (5 max)."));
    assert_eq!(library.num_albums(), 5);
}

#[test]
fn allow_policy_accepts_negative_durations() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.txt");

    let (library, output) = session(
        &path,
        DurationPolicy::Allow,
        "1\nA\n2\n0\nBackwards\nN\nG\n1990\n-2\n8\n9\n",
    );
    assert!(output.contains("Song added."));
    assert_eq!(library.album(0).unwrap().song(0).unwrap().duration(), -2.0);

    // The same file is malformed under the default policy.
    let (strict, output) = session(&path, DurationPolicy::Reject, "9\n");
    assert!(strict.is_empty());
    assert!(output.contains("Invalid duration -2"));
}

#[test]
fn unreadable_library_path_is_reported_as_an_error() {
    let tmp = TempDir::new().unwrap();
    let not_a_dir = tmp.path().join("notadir");
    fs::write(&not_a_dir, "plain file").unwrap();

    let path = not_a_dir.join("library.txt");

    let (library, output) = session(&path, DurationPolicy::Reject, "9\n");

    assert!(library.is_empty());
    assert!(!output.contains("No previous library."));
    assert!(output.contains("IO error:"));
    assert!(output.contains("Starting with an empty library."));
}

#[test]
fn failed_save_keeps_the_menu_and_the_library() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing_dir").join("library.txt");

    let (library, output) = session(&path, DurationPolicy::Reject, "1\nA\n8\n7\n9\n");

    assert!(output.contains("IO error:"));
    assert!(!output.contains("Saved."));
    assert!(output.contains("===== ALBUM #0 =====\nAlbum: A"));
    assert_eq!(library.num_albums(), 1);
    assert!(!path.exists());
}
