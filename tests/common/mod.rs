//! Shared mock servers for probe integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use net_probe::config::ProbeConfig;
use net_probe::net::SystemRoots;
use net_probe::Probe;
use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair};
use reqwest::StatusCode;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::RootCertStore;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

/// Read the request head and return its method.
async fn read_method<S>(stream: &mut S) -> Option<String>
where
    S: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    head.split_whitespace().next().map(str::to_string)
}

/// Status line for `status`, e.g. `503 Service Unavailable`.
///
/// Panics on codes that are not valid HTTP statuses so a broken test setup
/// shows up as a broken test.
fn status_line(status: u16) -> String {
    let code = StatusCode::from_u16(status)
        .unwrap_or_else(|_| panic!("mock backend given invalid status {status}"));
    format!("{} {}", code.as_u16(), code.canonical_reason().unwrap_or("Unknown"))
}

async fn write_response<S>(stream: &mut S, method: &str, status: u16, body: &str)
where
    S: AsyncWrite + Unpin,
{
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line(status),
        body.len(),
    );
    if method != "HEAD" {
        response.push_str(body);
    }
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Start a backend whose response depends on the request method.
///
/// Returns the bound address and a counter of requests received.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let counter = counter.clone();
            tokio::spawn(async move {
                let Some(method) = read_method(&mut socket).await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let (status, body) = f(method.clone()).await;
                write_response(&mut socket, &method, status, &body).await;
            });
        }
    });

    (addr, hits)
}

/// Start a backend that accepts connections and never answers.
#[allow(dead_code)]
pub async fn start_hung_backend() -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let _held = socket;
                tokio::time::sleep(Duration::from_secs(120)).await;
            });
        }
    });

    (addr, hits)
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A throwaway certificate authority for local TLS backends.
#[allow(dead_code)]
pub struct TestCa {
    cert: rcgen::Certificate,
    key: KeyPair,
}

#[allow(dead_code)]
impl TestCa {
    pub fn new(name: &str) -> Self {
        let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.distinguished_name = DistinguishedName::new();
        params.distinguished_name.push(DnType::CommonName, name);

        let key = KeyPair::generate().unwrap();
        let cert = params.self_signed(&key).unwrap();
        Self { cert, key }
    }

    pub fn der(&self) -> CertificateDer<'static> {
        self.cert.der().clone()
    }

    /// A root set trusting only this CA.
    pub fn roots(&self) -> SystemRoots {
        let mut store = RootCertStore::empty();
        store.add(self.der()).unwrap();
        SystemRoots {
            store,
            loaded: 1,
            skipped: 0,
        }
    }

    /// Issue a server certificate for `localhost` / `127.0.0.1`.
    fn issue_server_cert(&self) -> (CertificateDer<'static>, PrivateKeyDer<'static>) {
        let params =
            CertificateParams::new(vec!["localhost".to_string(), "127.0.0.1".to_string()]).unwrap();
        let key = KeyPair::generate().unwrap();
        let cert = params.signed_by(&key, &self.cert, &self.key).unwrap();
        let key_der = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key.serialize_der()));
        (cert.der().clone(), key_der)
    }
}

/// Start an HTTPS backend presenting a certificate issued by `ca`.
///
/// The counter tracks accepted TCP connections, so handshakes the client
/// aborts are still counted as attempts.
#[allow(dead_code)]
pub async fn start_tls_backend(ca: &TestCa, status: u16) -> (SocketAddr, Arc<AtomicU32>) {
    let (cert, key) = ca.issue_server_cert();
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let server_config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(vec![cert], key)
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(server_config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                let Ok(mut stream) = acceptor.accept(socket).await else {
                    return;
                };
                let Some(method) = read_method(&mut stream).await else {
                    return;
                };
                write_response(&mut stream, &method, status, "secure").await;
            });
        }
    });

    (addr, hits)
}

/// Probe `url` trusting exactly `roots`.
#[allow(dead_code)]
pub fn probe_url(url: &str, request_secs: u64, roots: SystemRoots) -> Probe {
    let mut config = ProbeConfig::default();
    config.target.url = url.to_string();
    config.timeouts.request_secs = request_secs;
    config.timeouts.connect_secs = request_secs;
    Probe::with_roots(&config, roots).unwrap()
}

/// Probe a local plain-HTTP target. No CA is needed without TLS.
#[allow(dead_code)]
pub fn local_probe(addr: SocketAddr, request_secs: u64) -> Probe {
    let roots = SystemRoots {
        store: RootCertStore::empty(),
        loaded: 0,
        skipped: 0,
    };
    probe_url(&format!("http://{}/", addr), request_secs, roots)
}
