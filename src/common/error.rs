use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda resposta de erro da API tem o formato { "error": "..." }.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Referência cruzada entre empresas (ex: profissional de outra empresa)
    #[error("{0}")]
    TenancyViolation(String),

    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    // Erros do banco são repassados como vieram, sem tradução.
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Os detalhes de cada campo entram na própria mensagem: todo
            // erro da API tem o mesmo formato { "error": "..." }.
            AppError::ValidationError(errors) => {
                let mut fields: Vec<String> = Vec::new();
                for (field, field_errors) in errors.field_errors() {
                    for message in field_errors.iter().filter_map(|e| e.message.as_ref()) {
                        fields.push(format!("{field}: {message}"));
                    }
                }
                fields.sort();
                (
                    StatusCode::BAD_REQUEST,
                    format!("Um ou mais campos são inválidos: {}", fields.join("; ")),
                )
            }

            AppError::TenancyViolation(msg)
            | AppError::MissingParameter(msg)
            | AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            // O `tracing` loga o detalhe; a mensagem do banco vai no corpo.
            AppError::DatabaseError(e) => {
                tracing::error!("Erro de banco de dados: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }

            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
