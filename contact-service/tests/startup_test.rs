mod common;

use contact_service::config::DatabaseConfig;
use contact_service::startup::Application;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::test]
async fn application_serves_over_tcp_on_random_port() {
    let app = Application::build_with_store(common::test_config(DatabaseConfig::default()), None)
        .await
        .expect("Failed to build application");
    let port = app.port();
    assert_ne!(port, 0);

    tokio::spawn(app.run_until_stopped());

    let mut stream = TcpStream::connect(("127.0.0.1", port))
        .await
        .expect("Failed to connect");
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "{}", response);
    assert!(response.contains("Agency API is running"));
}
