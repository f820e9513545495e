// SPDX-License-Identifier: MPL-2.0
//! End-to-end coverage of the two HTTP round-trips against a loopback stub
//! server: multipart assembly for `/classify` and the JSON payload for
//! `/correction`.

use sr_portal::api::{ApiClient, CorrectionReport, SubmissionInput};
use sr_portal::api::labels::{Priority, Team};
use sr_portal::error::Error;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc;

/// One captured HTTP request: the raw header block and the raw body bytes.
struct CapturedRequest {
    head: String,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Binds a loopback listener, serves exactly one request with the given
/// canned response, and hands the captured request back over a channel.
fn spawn_stub_server(
    status_line: &'static str,
    content_type: &'static str,
    response_body: &'static str,
) -> (String, mpsc::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut buffer = Vec::new();
        let mut chunk = [0_u8; 4096];

        let header_end = loop {
            if let Some(pos) = find_subslice(&buffer, b"\r\n\r\n") {
                break pos + 4;
            }
            let read = stream.read(&mut chunk).expect("read request head");
            assert!(read > 0, "connection closed before headers completed");
            buffer.extend_from_slice(&chunk[..read]);
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        while buffer.len() - header_end < content_length {
            let read = stream.read(&mut chunk).expect("read request body");
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len(),
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().ok();

        tx.send(CapturedRequest {
            head,
            body: buffer[header_end..].to_vec(),
        })
        .ok();
    });

    (format!("http://{addr}"), rx)
}

fn attachment_fixtures(dir: &std::path::Path) -> Vec<PathBuf> {
    let first = dir.join("incident-notes.pdf");
    let second = dir.join("screenshot.png");
    std::fs::write(&first, b"pdf payload").expect("write first attachment");
    std::fs::write(&second, b"png payload").expect("write second attachment");
    vec![first, second]
}

fn submission(files: Vec<PathBuf>) -> SubmissionInput {
    SubmissionInput {
        name: "Asha".to_string(),
        employee_id: "E1234".to_string(),
        query: "vpn keeps dropping".to_string(),
        files,
    }
}

#[tokio::test]
async fn classify_sends_multipart_fields_and_files_in_order() {
    let (base_url, rx) = spawn_stub_server(
        "200 OK",
        "application/json",
        r#"{"query":"vpn keeps dropping","priority":"LOW PRIORITY TECHNICAL","team":"TECH"}"#,
    );
    let dir = tempfile::tempdir().expect("temp dir");
    let files = attachment_fixtures(dir.path());

    let client = ApiClient::new(base_url);
    let result = client
        .classify(submission(files))
        .await
        .expect("classification should succeed");

    assert_eq!(result.priority, "LOW PRIORITY TECHNICAL");
    assert_eq!(result.team.as_deref(), Some("TECH"));
    assert!(!result.is_awareness());

    let captured = rx.recv().expect("captured request");
    assert!(captured.head.starts_with("POST /classify HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: multipart/form-data"));

    let body = captured.body_text();
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Asha"));
    assert!(body.contains("name=\"employeeId\""));
    assert!(body.contains("E1234"));
    assert!(body.contains("name=\"query\""));
    assert!(body.contains("vpn keeps dropping"));

    // Both attachments travel under the same `files` field, in selection
    // order, carrying their file names and contents.
    let first = body
        .find("name=\"files\"; filename=\"incident-notes.pdf\"")
        .expect("first file part present");
    let second = body
        .find("name=\"files\"; filename=\"screenshot.png\"")
        .expect("second file part present");
    assert!(first < second, "file parts must keep selection order");
    assert!(body.contains("pdf payload"));
    assert!(body.contains("png payload"));
}

#[tokio::test]
async fn classify_decodes_awareness_result_without_team() {
    let (base_url, _rx) = spawn_stub_server(
        "200 OK",
        "application/json",
        r#"{"query":"new circular","priority":"AWARENESS","team":null}"#,
    );

    let client = ApiClient::new(base_url);
    let result = client
        .classify(submission(Vec::new()))
        .await
        .expect("classification should succeed");

    assert!(result.is_awareness());
    assert_eq!(result.team, None);
    assert_eq!(result.team_label(), "");
}

#[tokio::test]
async fn classify_rejects_non_success_status() {
    let (base_url, _rx) = spawn_stub_server(
        "500 Internal Server Error",
        "application/json",
        r#"{"error":"model unavailable"}"#,
    );

    let client = ApiClient::new(base_url);
    let outcome = client.classify(submission(Vec::new())).await;

    match outcome {
        Err(Error::Http(message)) => assert!(message.contains("500")),
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn classify_rejects_unparsable_body() {
    let (base_url, _rx) = spawn_stub_server("200 OK", "text/html", "<html>login page</html>");

    let client = ApiClient::new(base_url);
    let outcome = client.classify(submission(Vec::new())).await;

    assert!(matches!(outcome, Err(Error::Parse(_))));
}

#[tokio::test]
async fn correction_posts_json_with_predicted_and_corrected_labels() {
    let (base_url, rx) = spawn_stub_server("200 OK", "application/json", r#"{"status":"success"}"#);

    let predicted = sr_portal::api::ClassificationResult {
        query: "vpn keeps dropping".to_string(),
        priority: "AWARENESS".to_string(),
        team: None,
    };
    let report = CorrectionReport::new(
        "Asha",
        "E1234",
        &predicted,
        Priority::UrgentTechnical,
        Team::Tech,
    );

    let client = ApiClient::new(base_url);
    client
        .submit_correction(&report)
        .await
        .expect("correction should succeed");

    let captured = rx.recv().expect("captured request");
    assert!(captured.head.starts_with("POST /correction HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));

    let body: serde_json::Value =
        serde_json::from_slice(&captured.body).expect("correction body is JSON");
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["employeeId"], "E1234");
    assert_eq!(body["query"], "vpn keeps dropping");
    assert_eq!(body["predictedPriority"], "AWARENESS");
    assert_eq!(body["predictedTeam"], "");
    assert_eq!(body["correctedPriority"], "HIGH PRIORITY URGENT TECHNICAL");
    assert_eq!(body["correctedTeam"], "TECH");
}

#[tokio::test]
async fn correction_failure_is_reported_not_retried() {
    let (base_url, rx) = spawn_stub_server("503 Service Unavailable", "text/plain", "overloaded");

    let predicted = sr_portal::api::ClassificationResult {
        query: "q".to_string(),
        priority: "LOW PRIORITY TECHNICAL".to_string(),
        team: Some("TECH".to_string()),
    };
    let report = CorrectionReport::new("Asha", "E1234", &predicted, Priority::Awareness, Team::Unassigned);

    let client = ApiClient::new(base_url);
    let outcome = client.submit_correction(&report).await;
    assert!(matches!(outcome, Err(Error::Http(_))));

    // Exactly one request reached the server; the failure was terminal.
    let _ = rx.recv().expect("captured request");
    assert!(rx.try_recv().is_err(), "no retry request expected");
}

#[tokio::test]
async fn classify_network_failure_maps_to_http_error() {
    // Nothing listens here; connection is refused immediately.
    let client = ApiClient::new("http://127.0.0.1:9");
    let outcome = client.classify(submission(Vec::new())).await;
    assert!(matches!(outcome, Err(Error::Http(_))));
}
