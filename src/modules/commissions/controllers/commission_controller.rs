//! Commission controller for HTTP endpoints
//!
//! Serves the record-entry surface: the entry form posts the sale draft as
//! the user edits it and renders the returned breakdown as a live preview.
//! Nothing is persisted here; commission is always re-derivable from the
//! stored sale fields.

use actix_web::{web, HttpResponse};

use crate::modules::commissions::services::CommissionEngine;
use crate::modules::sales::SaleDraft;

/// Preview the commission for a sale draft
///
/// POST /commissions/preview
pub async fn preview_commission(
    engine: web::Data<CommissionEngine>,
    draft: web::Json<SaleDraft>,
) -> HttpResponse {
    match draft.into_inner().normalize() {
        Ok(record) => {
            let breakdown = engine.breakdown(&record);
            HttpResponse::Ok().json(breakdown)
        }
        Err(err) => {
            tracing::warn!("Rejected sale draft: {}", err);
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": {
                    "code": "INVALID_SALE_DRAFT",
                    "message": err.to_string(),
                }
            }))
        }
    }
}

/// Configure commission routes
pub fn configure_commission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/commissions").route("/preview", web::post().to(preview_commission)),
    );
}
