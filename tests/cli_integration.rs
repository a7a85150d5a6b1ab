/*!
 * Integration tests driving the public API and the `treedump` binary
 */

use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

use treedump::{DirectoryNode, TreeDumpError};

fn treedump() -> Command {
    Command::new(env!("CARGO_BIN_EXE_treedump"))
}

fn fixture() -> tempfile::TempDir {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    let mut a = File::create(root.join("a.txt")).unwrap();
    writeln!(a, "a").unwrap();
    File::create(root.join("sub").join("b.txt")).unwrap();
    File::create(root.join(".hidden")).unwrap();
    temp_dir
}

#[test]
fn test_api_build_render_save_load() {
    let temp_dir = fixture();
    let root = temp_dir.path().join("root");
    let output = temp_dir.path().join("tree.xml");

    let tree = treedump::build(&root, false, None).unwrap().unwrap();
    let root_name = root.to_string_lossy().into_owned();
    assert_eq!(
        treedump::render(&tree),
        vec![root_name.clone(), "  a.txt".into(), "  sub".into(), "    b.txt".into()]
    );

    treedump::save(&tree, &output).unwrap();
    let loaded = treedump::load(&output).unwrap();
    assert_eq!(loaded, tree);

    let expected = DirectoryNode::new(root_name)
        .with_file("a.txt")
        .with_subdirectory(DirectoryNode::new("sub").with_file("b.txt"));
    assert_eq!(loaded, expected);
}

#[test]
fn test_api_load_rejects_garbage() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("broken.xml");
    fs::write(&path, "<directory name=\"x\"><file name=\"y\">").unwrap();

    let err = treedump::load(&path).unwrap_err();
    assert!(matches!(
        err,
        TreeDumpError::MalformedDocument(_) | TreeDumpError::Xml(_)
    ));
}

#[test]
fn test_cli_scan_and_save() {
    let temp_dir = fixture();
    let root = temp_dir.path().join("root");
    let output = temp_dir.path().join("out.xml");

    let result = treedump()
        .arg(&root)
        .arg("--save")
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("  a.txt"));
    assert!(stdout.contains("    b.txt"));
    assert!(!stdout.contains(".hidden"));
    assert!(stdout.contains("saved to"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<file name=\"a.txt\"/>"));
}

#[test]
fn test_cli_show_hidden_and_depth() {
    let temp_dir = fixture();
    let root = temp_dir.path().join("root");

    let result = treedump()
        .arg(&root)
        .args(["-a", "-d", "0"])
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains(".hidden"));
    assert!(!stdout.contains("b.txt"));
}

#[test]
fn test_cli_load_takes_precedence() {
    let temp_dir = fixture();
    let saved = temp_dir.path().join("saved.xml");
    fs::write(
        &saved,
        "<?xml version='1.0' encoding='utf-8'?>\n<directory name=\"from-file\"><file name=\"only.txt\" /></directory>",
    )
    .unwrap();

    let result = treedump()
        .arg(temp_dir.path().join("root"))
        .arg("--load")
        .arg(&saved)
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("from-file\n  only.txt"));
    assert!(!stdout.contains("a.txt"));
}

#[test]
fn test_cli_rejects_non_directory() {
    let temp_dir = fixture();
    let file = temp_dir.path().join("root").join("a.txt");

    let result = treedump().arg(&file).output().unwrap();
    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    assert!(String::from_utf8_lossy(&result.stderr).contains("is not a directory"));
}
