use std::time::Duration;

use actix_web::web::Data;

use crate::consts;
use crate::models::StatusResponse;
use crate::models::request::ChatCompletionCreate;
use crate::models::response::ChatCompletion;
use crate::shutdown::Shutdown;
use crate::state::AppState;

pub async fn health(state: Data<AppState>) -> impl actix_web::Responder {
    let status = if state.is_healthy() { "ok" } else { "not ok" };
    actix_web::HttpResponse::Ok().json(StatusResponse::new(status))
}

pub async fn chat_completion(
    request: actix_web::web::Json<ChatCompletionCreate>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    actix_web::HttpResponse::Ok().json(ChatCompletion::mock_reply(request.0.model))
}

pub async fn restart(shutdown: Data<dyn Shutdown>) -> impl actix_web::Responder {
    log::info!("restart requested, signaling process group");

    // The signal runs after the response is handed off; signaling inline
    // would race the handler against its own termination.
    actix_web::rt::spawn(async move {
        tokio::time::sleep(Duration::from_millis(consts::RESTART_SIGNAL_DELAY_MS)).await;
        if let Err(e) = shutdown.terminate() {
            log::error!("restart signal failed: {:?}", e);
        }
    });

    actix_web::HttpResponse::Ok().json(StatusResponse::new("restarting"))
}
