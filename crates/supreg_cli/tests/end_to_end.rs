use std::path::Path;
use std::process::Command;

#[test]
fn test_full_lifecycle() {
    // "CARGO_MANIFEST_DIR" points to crates/supreg_cli; the workspace root
    // is two levels up.
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let workspace_root = Path::new(manifest_dir)
        .parent()
        .expect("no parent")
        .parent()
        .expect("no grandparent");

    // Keep the database in the target directory, and start from scratch.
    let db_dir = workspace_root.join("target/test_supreg");
    std::fs::create_dir_all(&db_dir).expect("failed to create db dir");
    let db_path = db_dir.join("e2e.db");
    let _ = std::fs::remove_file(&db_path);

    let run = |args: &[&str]| {
        Command::new("cargo")
            .args(["run", "-p", "supreg_cli", "--quiet", "--"])
            .args(args)
            .current_dir(workspace_root)
            .env("SUPREG_DB", &db_path)
            .output()
            .expect("failed to run supreg")
    };

    // 1. Register
    println!("🧪 Running register...");
    let out = run(&[
        "register",
        "--first-name", "Maria",
        "--last-name", "Silva",
        "--national-id", "12345678901",
        "--father-name", "Jose",
        "--mother-name", "Ana",
        "--address", "Rua A, 123",
        "--postal-code", "01310930",
    ]);
    assert!(out.status.success(), "register failed: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("registered successfully"), "unexpected output: {stdout}");
    let id_line = stdout
        .lines()
        .find(|l| l.contains("Id:"))
        .expect("id not found in output");
    let id = id_line.split(": ").nth(1).unwrap().trim().to_string();
    println!("   🔑 Captured id: {id}");

    // 2. A duplicate registration must be turned away.
    let out = run(&[
        "register",
        "--first-name", "Mariana",
        "--national-id", "12345678901",
        "--father-name", "Jose",
        "--mother-name", "Ana",
        "--address", "Rua B, 456",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("already registered"), "unexpected output: {stdout}");

    // 3. Fetch it back
    println!("🧪 Running fetch...");
    let out = run(&["fetch", "--national-id", "12345678901"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Maria Silva"), "unexpected output: {stdout}");
    assert!(stdout.contains("Rua A, 123"), "unexpected output: {stdout}");

    // 4. List shows exactly the one id
    let out = run(&["list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&format!("Id: {id}")), "unexpected output: {stdout}");

    // 5. Delete, then fetch must come back empty
    println!("🧪 Running delete...");
    let out = run(&["delete", "--national-id", "12345678901"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("deleted successfully"), "unexpected output: {stdout}");

    let out = run(&["fetch", "--national-id", "12345678901"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No supplier found"), "unexpected output: {stdout}");

    // 6. delete-all with --yes leaves an empty registry
    let out = run(&["delete-all", "--yes"]);
    assert!(out.status.success());
    let out = run(&["list"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No suppliers registered"), "unexpected output: {stdout}");

    println!("✅ End-to-End Test Passed!");
}
