use tokio::{io::{AsyncReadExt, AsyncWriteExt}, net::TcpListener, sync::oneshot};

use common::catalog::{JobModel, SkillItem};

use super::*;
use crate::provider_utils::catalog_client::CatalogClient;

/// Answers a single request with `status_line` and `body`, and reports the request line it saw.
async fn serve_once(status_line: &'static str, body: &'static str) -> (CatalogClient, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&request).to_string();
        let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    (CatalogClient::new(format!("http://{addr}/")), rx)
}

#[tokio::test]
async fn test_list_skills_reads_whole_array() {
    let (client, request_line) = serve_once(
        "HTTP/1.1 200 OK",
        r#"[{"id": 1, "skill_name": "Python"}, {"id": 2, "skill_name": "Go"}]"#,
    ).await;
    let skills = list_skills_from(&client).await.unwrap();
    assert_eq!(skills, vec![SkillItem::new(1, "Python"), SkillItem::new(2, "Go")]);
    assert_eq!(request_line.await.unwrap(), "GET /skills HTTP/1.1");
}

#[tokio::test]
async fn test_list_jobs_skips_undecodable_record() {
    let (client, _) = serve_once(
        "HTTP/1.1 200 OK",
        r#"[
            {"id": 1, "job_title": "Engineer", "job_model": "Remote", "job_type": "Full-time", "job_level": "Entry-level"},
            {"id": 2, "job_title": "Manager"}
        ]"#,
    ).await;
    let jobs = list_jobs_from(&client).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_model, JobModel::Remote);
}

#[tokio::test]
async fn test_error_status_is_a_fetch_failure() {
    let (client, _) = serve_once("HTTP/1.1 500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let err = list_jobs_from(&client).await.unwrap_err();
    assert!(format!("{err:#}").contains("error status"));
}

#[tokio::test]
async fn test_non_array_body_is_a_fetch_failure() {
    let (client, _) = serve_once("HTTP/1.1 200 OK", r#"{"skills": []}"#).await;
    assert!(list_skills_from(&client).await.is_err());
}

#[tokio::test]
async fn test_unreachable_provider_is_a_fetch_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = CatalogClient::new(format!("http://{addr}"));
    assert!(list_skills_from(&client).await.is_err());
}
