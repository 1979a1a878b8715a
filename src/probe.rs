use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Whether the target application answered the availability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Probe the application with a single GET. Only HTTP 200 counts as
/// available; any other status or any network error maps to
/// `Unavailable`: the caller skips, it never fails, on that outcome.
pub async fn probe(base_url: &str) -> Availability {
    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => return Availability::Unavailable(format!("http client setup failed: {e}")),
    };

    match client.get(base_url).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => Availability::Available,
        Ok(response) => Availability::Unavailable(format!(
            "{base_url} answered {} instead of 200",
            response.status()
        )),
        Err(e) => Availability::Unavailable(format!("{base_url} unreachable: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    // Minimal one-shot HTTP responder on an OS-assigned port.
    fn serve_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                        .as_bytes(),
                );
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn http_200_is_available() {
        let url = serve_once("HTTP/1.1 200 OK");
        assert_eq!(probe(&url).await, Availability::Available);
    }

    #[tokio::test]
    async fn non_200_is_unavailable() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable");
        let outcome = probe(&url).await;
        assert!(!outcome.is_available());
        match outcome {
            Availability::Unavailable(reason) => assert!(reason.contains("503")),
            Availability::Available => unreachable!(),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_unavailable() {
        // Bind then drop to find a port nothing is listening on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let outcome = probe(&format!("http://127.0.0.1:{port}")).await;
        assert!(!outcome.is_available());
    }
}
