use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const STROKE_SCRIPT: &str = r#"
# one horizontal pen stroke
{"type": "bounds", "left": 10, "top": 10}
{"type": "stroke_width", "width": 8}
{"type": "mouse_down", "x": 20, "y": 40}
{"type": "mouse_move", "x": 60, "y": 40}
{"type": "mouse_move", "x": 100, "y": 40}
{"type": "mouse_up"}
"#;

fn slateboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("slateboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_script(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("events.jsonl");
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_small_canvas_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("small.toml");
    std::fs::write(&path, "[canvas]\nwidth = 160\nheight = 90\n").unwrap();
    path
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Whiteboard drawing surface with PNG copy, download and submit",
        ));
}

#[test]
fn no_flags_prints_short_usage() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("slateboard --init-config"));
}

#[test]
fn print_schema_emits_json_schema() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .arg("--print-schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"canvas\"").and(predicate::str::contains("\"submit\"")));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    assert!(temp.path().join("slateboard").join("config.toml").exists());

    slateboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn download_writes_png_with_fixed_name() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let config = write_small_canvas_config(temp.path());
    let downloads = temp.path().join("downloads");

    slateboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--download")
        .arg("--download-dir")
        .arg(&downloads)
        .assert()
        .success()
        .stdout(predicate::str::contains("my-image-name.png"));

    let png = std::fs::read(downloads.join("my-image-name.png")).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    let decoded = cairo::ImageSurface::create_from_png(&mut &png[..]).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (160, 90));
}

#[test]
fn dump_state_reports_tracker_and_style() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);

    let output = slateboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--dump-state")
        .output()
        .unwrap();
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["mode"]["tool"], "pen");
    assert_eq!(state["stroke"]["active"], false);
    assert_eq!(state["stroke"]["last"]["x"], 90.0);
    assert_eq!(state["style"]["stroke_width"], 8);
}

#[test]
fn malformed_script_fails_with_line_number() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "{\"type\": \"clear\"}\nnot json\n");

    slateboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn submit_posts_image_to_endpoint() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let config = write_small_canvas_config(temp.path());

    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let server_thread = std::thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        request
            .respond(tiny_http::Response::from_string("{\"answer\":\"line\"}"))
            .unwrap();
        body
    });

    slateboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--submit")
        .arg("--endpoint")
        .arg(format!("http://{}/image", addr))
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTP 200"));

    let body: serde_json::Value = serde_json::from_str(&server_thread.join().unwrap()).unwrap();
    assert_eq!(body["user_query"], "image selected");
    assert_eq!(body["meta"]["context"], "doubt");
    assert!(
        body["image_blob"]
            .as_str()
            .is_some_and(|blob| blob.starts_with("iVBORw0KGgo"))
    );
}

#[test]
fn invalid_endpoint_is_rejected() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .args(["--submit", "--endpoint", "no scheme here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint"));
}

#[test]
fn non_http_endpoint_is_rejected() {
    let temp = TempDir::new().unwrap();
    slateboard_cmd(&temp)
        .args(["--submit", "--endpoint", "mailto:teacher@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint"));
}

#[test]
fn copy_without_clipboard_still_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let config = write_small_canvas_config(temp.path());
    let empty_path = temp.path().join("no-bin");
    std::fs::create_dir(&empty_path).unwrap();

    slateboard_cmd(&temp)
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_RUNTIME_DIR", temp.path())
        .env("PATH", &empty_path)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied").not());
}
