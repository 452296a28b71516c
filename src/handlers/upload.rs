use std::path::PathBuf;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::{StreamExt, TryStreamExt};
use uuid::Uuid;

use crate::auth::middleware::AdminSession;

const UPLOAD_DIR: &str = "./uploads";
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Collections that accept an uploaded image.
const ALLOWED_KINDS: &[&str] = &["biodata", "experience", "activity", "article"];

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "message": message }))
}

/// Identify the image format from the file's leading bytes. The client's
/// declared content type is ignored; only the payload counts.
fn sniff_image(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("jpg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("webp"),
        _ => None,
    }
}

/// POST /api/upload/{kind} — store an image and return its public URL
/// (requires auth).
pub async fn upload_image(
    _session: AdminSession,
    path: web::Path<String>,
    mut payload: Multipart,
) -> impl Responder {
    let kind = path.into_inner();
    if !ALLOWED_KINDS.contains(&kind.as_str()) {
        return bad_request("Unknown upload kind");
    }

    let mut field = match payload.try_next().await {
        Ok(Some(field)) => field,
        Ok(None) => return bad_request("No file provided"),
        Err(e) => {
            tracing::warn!("rejected malformed multipart payload: {e}");
            return bad_request("Invalid multipart data");
        }
    };

    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("failed to read upload stream: {e}");
                return bad_request("Failed to read file data");
            }
        };
        if bytes.len() + chunk.len() > MAX_FILE_SIZE {
            return bad_request("File too large. Maximum size is 5MB.");
        }
        bytes.extend_from_slice(&chunk);
    }

    if bytes.is_empty() {
        return bad_request("Empty file");
    }

    let Some(ext) = sniff_image(&bytes) else {
        return bad_request("File content does not match an allowed image type.");
    };

    let upload_path = PathBuf::from(UPLOAD_DIR);
    if let Err(e) = tokio::fs::create_dir_all(&upload_path).await {
        tracing::error!("failed to create upload directory: {e}");
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Failed to save file",
        }));
    }

    let filename = format!("{}-{}.{ext}", kind, Uuid::new_v4().simple());
    if let Err(e) = tokio::fs::write(upload_path.join(&filename), &bytes).await {
        tracing::error!("failed to write {filename}: {e}");
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Failed to save file",
        }));
    }

    tracing::info!("stored {} upload {} ({} bytes)", kind, filename, bytes.len());
    HttpResponse::Created().json(serde_json::json!({
        "imageUrl": format!("/uploads/{filename}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::sniff_image;

    #[test]
    fn recognizes_png_and_jpeg_headers() {
        assert_eq!(sniff_image(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]), Some("png"));
        assert_eq!(sniff_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("jpg"));
    }

    #[test]
    fn recognizes_webp_riff_container() {
        let mut header = vec![0x52, 0x49, 0x46, 0x46, 0, 0, 0, 0];
        header.extend_from_slice(b"WEBP");
        assert_eq!(sniff_image(&header), Some("webp"));
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert_eq!(sniff_image(b"<svg xmlns="), None);
        assert_eq!(sniff_image(&[]), None);
    }
}
