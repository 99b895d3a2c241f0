use crate::{error::Result, models::DecodedImage};
use std::path::{Path, PathBuf};

/// Writes each image to `dir` under its download name, creating `dir` if needed.
pub async fn save_images(images: &[DecodedImage], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut paths = Vec::with_capacity(images.len());
    for image in images {
        let path = dir.join(image.file_name());
        tokio::fs::write(&path, &image.bytes).await?;
        log::info!("💾 Saved {} ({} bytes)", path.display(), image.len());
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_images_are_written_with_download_names() {
        let dir = std::env::temp_dir().join(format!("chronoscene-{}", uuid::Uuid::new_v4()));
        let images = vec![
            DecodedImage::new(0, b"first".to_vec()),
            DecodedImage::new(1, b"second".to_vec()),
        ];

        let paths = save_images(&images, &dir).await.unwrap();

        assert_eq!(paths, vec![dir.join("imagen_1.png"), dir.join("imagen_2.png")]);
        assert_eq!(tokio::fs::read(&paths[1]).await.unwrap(), b"second");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
