use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mdscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdscope"))
}

fn write_doc(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "# doc\n").unwrap();
}

fn sample_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "Git/笔记.md");
    write_doc(dir.path(), "Redis/持久化.md");
    write_doc(dir.path(), "Redis/集群.md");
    write_doc(dir.path(), "docs/git-commit-template.md");
    write_doc(dir.path(), ".git/info.md");
    dir
}

#[test]
fn shows_help() {
    mdscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("count"));
}

#[test]
fn commit_writes_selected_messages() {
    let repo = sample_repo();
    mdscope()
        .current_dir(repo.path())
        .arg("commit")
        .write_stdin("1,3,9\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Git/笔记.md"))
        .stdout(predicate::str::contains("docs(Git): 添加笔记"))
        .stdout(predicate::str::contains("共生成 2 条"))
        .stdout(predicate::str::contains("git-commit-template.md").not());

    let written = fs::read_to_string(repo.path().join("git-commit-template-result.txt")).unwrap();
    assert_eq!(written, "docs(Git): 添加笔记\ndocs(Redis): 添加集群\n");
}

#[test]
fn commit_rerun_overwrites_output() {
    let repo = sample_repo();
    let out = repo.path().join("msgs.txt");
    for stdin in ["1,2,3\n2\n", "2\n5\n"] {
        mdscope()
            .current_dir(repo.path())
            .args(["commit", "--output"])
            .arg(&out)
            .write_stdin(stdin)
            .assert()
            .success();
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), "docs(Redis): 完善持久化\n");
}

#[test]
fn commit_with_nothing_selected_exits_cleanly() {
    let repo = sample_repo();
    mdscope()
        .current_dir(repo.path())
        .arg("commit")
        .write_stdin("x,0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("未选择有效文件"));
    assert!(!repo.path().join("git-commit-template-result.txt").exists());
}

#[test]
fn commit_in_empty_tree_reports_no_files() {
    let dir = tempfile::tempdir().unwrap();
    mdscope()
        .current_dir(dir.path())
        .arg("commit")
        .assert()
        .success()
        .stdout(predicate::str::contains("未找到 Markdown 文档文件"));
}

#[test]
fn commit_bad_verb_fails() {
    let repo = sample_repo();
    mdscope()
        .current_dir(repo.path())
        .arg("commit")
        .write_stdin("1\nnope\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid verb choice"));
}

#[test]
fn commit_uses_profile() {
    let repo = sample_repo();
    let profile = repo.path().join("profile.yaml");
    fs::write(
        &profile,
        "default_label: misc\ntopics:\n  - { label: cache, needle: Redis }\nverbs: [add, fix]\n",
    )
    .unwrap();
    mdscope()
        .current_dir(repo.path())
        .args(["commit", "--config"])
        .arg(&profile)
        .write_stdin("1,2\n2\n")
        .assert()
        .success();
    let written = fs::read_to_string(repo.path().join("git-commit-template-result.txt")).unwrap();
    assert_eq!(written, "docs(misc): fix笔记\ndocs(cache): fix持久化\n");
}

#[test]
fn count_prints_json_report() {
    let repo = sample_repo();
    let assert = mdscope()
        .args(["count", "--format", "json"])
        .arg(repo.path())
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["entries"][0]["directory"], "Redis");
    assert_eq!(json["entries"][0]["count"], 2);
}

#[test]
fn count_writes_html_file() {
    let repo = sample_repo();
    let out = repo.path().join("report.html");
    mdscope()
        .args(["count", "--format", "html", "-o"])
        .arg(&out)
        .arg(repo.path())
        .assert()
        .success();
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<td>Redis</td><td>2</td>"));
    assert!(html.contains("<td>总计</td><td>4</td>"));
}

#[test]
fn count_missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    mdscope()
        .arg("count")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read directory"));
}
