use crate::config::Config;
use crate::scraper::{ExtractError, PageFetcher, ThumbnailError};
use crate::state::AppState;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};

pub enum Canned {
    Page(String),
    Timeout,
}

/// In-memory stand-in for the network. Unknown URLs fail like a refused
/// connection.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Canned>,
    images: HashMap<String, Vec<u8>>,
    page_calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), Canned::Page(html.into()));
        self
    }

    pub fn timeout(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Canned::Timeout);
        self
    }

    pub fn image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, ExtractError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Canned::Page(html)) => Ok(html.clone()),
            Some(Canned::Timeout) => Err(ExtractError::Timeout { secs: 10 }),
            None => Err(ExtractError::Network("connection refused".into())),
        }
    }

    fn fetch_image(&self, url: &str, max_bytes: u64) -> Result<Vec<u8>, ThumbnailError> {
        match self.images.get(url) {
            Some(bytes) if bytes.len() as u64 > max_bytes => {
                Err(ThumbnailError::TooLarge { limit: max_bytes })
            }
            Some(bytes) => Ok(bytes.clone()),
            None => Err(ThumbnailError::Network("HTTP 404 Not Found".into())),
        }
    }
}

pub fn test_state(fetcher: FakeFetcher) -> AppState {
    let config = Config {
        max_concurrency: 2,
        ..Config::default()
    };
    AppState::with_fetcher(config, Box::new(fetcher))
}

/// A listing page shaped like a Zillow home-details page.
pub fn listing_page(
    price: Option<&str>,
    summary_items: &[&str],
    headline: Option<&str>,
    og_image: Option<&str>,
) -> String {
    let meta = og_image
        .map(|src| format!(r#"<meta property="og:image" content="{src}">"#))
        .unwrap_or_default();

    let price = price
        .map(|p| format!(r#"<div class="summary"><span data-testid="price"><span>{p}</span></span></div>"#))
        .unwrap_or_default();

    let items: String = summary_items
        .iter()
        .map(|text| match text.split_once(' ') {
            Some((n, unit)) => format!(
                r#"<span data-testid="bed-bath-item"><strong>{n}</strong> <span>{unit}</span></span>"#
            ),
            None => format!(r#"<span data-testid="bed-bath-item">{text}</span>"#),
        })
        .collect();

    let headline = headline
        .map(|h| format!(r#"<h1 data-testid="home-details-summary-headline">{h}</h1>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Listing</title>
  {meta}
</head>
<body>
  <span>Save</span>
  {price}
  <div class="facts">{items}</div>
  {headline}
</body>
</html>"#
    )
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 120, 40]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    buf
}

/// Local HTTP/1.1 server answering every connection with the same bytes.
/// Each request head it receives is forwarded to `requests`.
pub struct CannedServer {
    pub base: String,
    pub requests: mpsc::Receiver<String>,
}

pub fn canned_server(response: Vec<u8>, stall: Duration) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    let (tx, requests) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

            thread::sleep(stall);
            let _ = stream.write_all(&response);
        }
    });

    CannedServer { base, requests }
}

/// Raw response bytes; `Content-Length` is added only when `with_length` is set,
/// otherwise the body runs until the connection closes.
pub fn raw_response(status: &str, content_type: &str, body: &[u8], with_length: bool) -> Vec<u8> {
    let mut head = format!("HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nConnection: close\r\n");
    if with_length {
        head.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    head.push_str("\r\n");

    let mut out = head.into_bytes();
    out.extend_from_slice(body);
    out
}
