// Dropspot - core/media.rs
//
// Media-type handling and preview payload construction.
//
// The accept guard works on the *declared* media type, derived from the
// file extension — the same contract a browser file input applies to its
// `accept` attribute. Whether the bytes actually decode is established
// later, on the background read, and failure there is a real error.

use crate::util::constants::IMAGE_MEDIA_PREFIX;
use crate::util::error::MediaError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;

/// Extension → declared media type. Lookup is case-insensitive.
///
/// Image subtypes beyond the advertised PNG/JPG/GIF are listed on purpose:
/// the accept guard is "starts with image/", so e.g. a `.webp` passes the
/// guard and then exercises the decode path like any other image.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
];

/// Declared media type for files with an unknown or missing extension.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Declared media type for a path, derived from its extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MEDIA_TYPE;
    };
    MEDIA_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}

/// Returns true when a declared media type is accepted by the drop zone.
pub fn is_image(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Encode raw bytes as a self-contained `data:` URL.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", BASE64.encode(bytes))
}

/// A fully prepared preview of an accepted image.
///
/// Carries both the textual encoding (the `data:` URL, the portable form of
/// the payload) and the decoded RGBA pixels the GUI uploads into a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    /// Declared media type of the source file.
    pub media_type: &'static str,
    /// Base64 `data:` URL of the raw file bytes.
    pub data_url: String,
    /// Decoded pixels, 8-bit RGBA, row-major.
    pub rgba: Vec<u8>,
    /// Pixel width of the decoded image.
    pub width: usize,
    /// Pixel height of the decoded image.
    pub height: usize,
}

/// Build a [`PreviewImage`] from the raw bytes of the file at `path`.
///
/// Decodes via the `image` crate (format sniffed from the bytes, not the
/// extension) and encodes the untouched source bytes as a data URL.
pub fn decode_preview(path: &Path, bytes: &[u8]) -> Result<PreviewImage, MediaError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| MediaError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let media_type = media_type_for_path(path);

    Ok(PreviewImage {
        media_type,
        data_url: encode_data_url(media_type, bytes),
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Encode a solid-colour PNG in memory for decode tests.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 120, 200, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(media_type_for_path(Path::new("photo.png")), "image/png");
        assert_eq!(media_type_for_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("anim.gif")), "image/gif");
        assert_eq!(media_type_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            media_type_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
        assert_eq!(
            media_type_for_path(Path::new("weird.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_image_guard_accepts_any_image_subtype() {
        assert!(is_image("image/png"));
        assert!(is_image("image/webp"));
        assert!(is_image("image/svg+xml"));
        assert!(!is_image("text/plain"));
        assert!(!is_image("application/octet-stream"));
    }

    #[test]
    fn test_data_url_shape() {
        // "abc" -> "YWJj" in standard base64.
        assert_eq!(
            encode_data_url("image/png", b"abc"),
            "data:image/png;base64,YWJj"
        );
    }

    #[test]
    fn test_decode_preview_roundtrip() {
        let bytes = png_bytes(4, 3);
        let preview = decode_preview(&PathBuf::from("tiny.png"), &bytes).unwrap();

        assert_eq!(preview.media_type, "image/png");
        assert_eq!(preview.width, 4);
        assert_eq!(preview.height, 3);
        assert_eq!(preview.rgba.len(), 4 * 3 * 4);
        assert!(preview.data_url.starts_with("data:image/png;base64,"));
        // The data URL encodes the untouched source bytes.
        let encoded = preview.data_url.split(',').nth(1).unwrap();
        assert_eq!(
            base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .unwrap(),
            bytes
        );
    }

    #[test]
    fn test_decode_preview_rejects_garbage() {
        let err = decode_preview(&PathBuf::from("fake.png"), b"definitely not an image");
        assert!(matches!(
            err,
            Err(crate::util::error::MediaError::Decode { .. })
        ));
    }
}
