// src/common/csv_export.rs

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::common::error::AppError;

/// Serializa uma tabela em CSV: uma linha de cabeçalho (nomes dos campos)
/// e uma linha por registro. O cabeçalho sai mesmo quando não há registros.
pub fn to_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<String, AppError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Falha ao finalizar o CSV: {}", e))?;
    String::from_utf8(data)
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("CSV não é UTF-8: {}", e)))
}

// Resposta de download (Content-Disposition: attachment)
pub struct CsvDownload {
    pub filename: &'static str,
    pub body: String,
}

impl IntoResponse for CsvDownload {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}
