use axum::extract::{multipart::MultipartRejection, Multipart};

use crate::{
    model::post::{ImageUpload, WritePostForm},
    server::error::Error,
};

/// Reads the `title`, `content` and `img` fields of a post submission.
///
/// An `img` part without a file name or without bytes counts as no image. Unknown fields are
/// ignored.
pub async fn read_write_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<WritePostForm, Error> {
    let mut multipart = multipart.map_err(|rejection| Error::MalformedBody(rejection.body_text()))?;
    let mut form = WritePostForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => form.title = field.text().await.map_err(malformed)?,
            "content" => form.content = field.text().await.map_err(malformed)?,
            "img" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(malformed)?;

                if !file_name.is_empty() && !bytes.is_empty() {
                    form.img = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn malformed(err: axum::extract::multipart::MultipartError) -> Error {
    Error::MalformedBody(err.body_text())
}
