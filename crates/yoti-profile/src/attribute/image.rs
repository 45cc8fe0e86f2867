//! Image values (`JPEG` and `PNG` content types).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encoding of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Jpeg,
    Png,
}

impl ImageType {
    /// MIME type, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
        }
    }
}

/// Raw image bytes plus their encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    image_type: ImageType,
    data: Vec<u8>,
}

impl Image {
    pub fn new(image_type: ImageType, data: Vec<u8>) -> Self {
        Self { image_type, data }
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    pub fn mime_type(&self) -> &'static str {
        self.image_type.mime_type()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// `data:` URL for embedding, e.g. `data:image/png;base64,iVBOR...`.
    ///
    /// Built on every call from the stored type and bytes.
    pub fn base64_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.data))
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({}, {} bytes)", self.mime_type(), self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jpeg_data_url_prefix() {
        let image = Image::new(ImageType::Jpeg, vec![0xff, 0xd8, 0xff]);
        assert_eq!(image.base64_url(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_png_data_url_prefix() {
        let image = Image::new(ImageType::Png, b"\x89PNG".to_vec());
        assert!(image.base64_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_debug_elides_bytes() {
        let image = Image::new(ImageType::Png, vec![0; 1024]);
        assert_eq!(format!("{image:?}"), "Image(image/png, 1024 bytes)");
    }

    proptest! {
        #[test]
        fn base64_url_decodes_to_original(data in proptest::collection::vec(any::<u8>(), 0..512), png in any::<bool>()) {
            let image_type = if png { ImageType::Png } else { ImageType::Jpeg };
            let image = Image::new(image_type, data.clone());
            let url = image.base64_url();
            let prefix = format!("data:{};base64,", image_type.mime_type());
            prop_assert!(url.starts_with(&prefix));
            let decoded = STANDARD.decode(&url[prefix.len()..]).unwrap();
            prop_assert_eq!(decoded, data);
        }
    }
}
