// thumbnails.rs
use crate::domain::ListingRecord;
use crate::pipeline::map_ordered;
use crate::scraper::{PageFetcher, ThumbnailError};
use base64::Engine;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

#[derive(Debug, Clone, Copy)]
pub struct ThumbnailOptions {
    pub max_width: u32,
    pub max_bytes: u64,
}

/// A scaled preview ready to inline into the page.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

/// A row's caption and its preview, or why the preview is missing.
#[derive(Debug)]
pub struct Preview {
    pub caption: String,
    pub image: Result<Thumbnail, ThumbnailError>,
}

/// Load previews for every record that has a thumbnail URL, in record order.
/// Records without one are skipped.
pub fn load_previews(
    fetcher: &dyn PageFetcher,
    records: &[ListingRecord],
    opts: ThumbnailOptions,
    concurrency: usize,
) -> Vec<Preview> {
    let with_images: Vec<(&str, String)> = records
        .iter()
        .filter_map(|r| r.thumbnail.as_deref().map(|url| (url, r.caption())))
        .collect();

    map_ordered(
        &with_images,
        concurrency,
        |(url, caption)| {
            let image = load_thumbnail(fetcher, url, opts);
            if let Err(e) = &image {
                tracing::warn!(%url, error = %e, "thumbnail failed to load");
            }
            Preview {
                caption: caption.clone(),
                image,
            }
        },
        |(_, caption)| Preview {
            caption: caption.clone(),
            image: Err(ThumbnailError::Network("thumbnail thread panicked".into())),
        },
    )
}

pub fn load_thumbnail(
    fetcher: &dyn PageFetcher,
    url: &str,
    opts: ThumbnailOptions,
) -> Result<Thumbnail, ThumbnailError> {
    let bytes = fetcher.fetch_image(url, opts.max_bytes)?;
    render_thumbnail(&bytes, opts.max_width)
}

/// Decode, shrink to `max_width` if wider (aspect kept), re-encode as JPEG.
pub fn render_thumbnail(bytes: &[u8], max_width: u32) -> Result<Thumbnail, ThumbnailError> {
    let mut img = image::load_from_memory(bytes)?;

    if img.width() > max_width {
        img = img.resize(max_width, u32::MAX, FilterType::Triangle);
    }

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&buf);

    Ok(Thumbnail {
        data_uri: format!("data:image/jpeg;base64,{encoded}"),
        width: rgb.width(),
        height: rgb.height(),
    })
}
