use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let pid = std::process::id();
    std::env::temp_dir().join(format!("mulegraph-{prefix}-{pid}-{nanos}"))
}

fn mulegraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mulegraph"))
}

#[test]
fn missing_repository_root_is_fatal() {
    let home = unique_temp_dir("cli-no-repo");
    fs::create_dir_all(&home).expect("create fake home");

    let output = Command::new(mulegraph_bin())
        .env("HOME", &home)
        .output()
        .expect("run mulegraph");

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert_eq!(output.status.code(), Some(1), "stderr:\n{stderr}");
    assert!(
        stderr.contains("repository directory not found"),
        "unexpected stderr:\n{stderr}"
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn empty_graph_warns_and_exits_zero_without_an_output_file() {
    let home = unique_temp_dir("cli-empty-graph");
    let repo = home.join(".m2").join("repository");
    fs::create_dir_all(repo.join("com/example/foo/1.0")).expect("create repo tree");
    fs::write(
        repo.join("com/example/foo/1.0/pom.xml"),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <project xmlns=\"http://maven.apache.org/POM/4.0.0\">\
           <groupId>com.example</groupId>\
           <artifactId>foo</artifactId>\
           <version>1.0</version>\
         </project>",
    )
    .expect("write pom.xml");
    let out = home.join("deps.png");

    let output = Command::new(mulegraph_bin())
        .env("HOME", &home)
        .arg("--out")
        .arg(&out)
        .arg("--max")
        .arg("10")
        .output()
        .expect("run mulegraph");

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert_eq!(output.status.code(), Some(0), "stderr:\n{stderr}");
    assert!(
        stderr.contains("No MuleSoft dependencies found"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(!out.exists(), "empty graph should not write an image");

    let _ = fs::remove_dir_all(home);
}
