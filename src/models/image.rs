pub const MIME_TYPE: &str = "image/png";

/// One generated image, in the position the provider returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Zero-based position in the response.
    pub index: usize,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    pub fn new(index: usize, bytes: Vec<u8>) -> Self {
        Self { index, bytes }
    }

    /// Download name, numbered from 1.
    pub fn file_name(&self) -> String {
        format!("imagen_{}.png", self.index + 1)
    }

    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_one_based() {
        assert_eq!(DecodedImage::new(0, vec![1]).file_name(), "imagen_1.png");
        assert_eq!(DecodedImage::new(4, vec![1]).file_name(), "imagen_5.png");
        assert_eq!(DecodedImage::new(0, vec![]).mime_type(), "image/png");
    }
}
