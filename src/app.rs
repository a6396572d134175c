use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{handlers, shutdown, state};

pub fn create_app(
    state: Arc<state::AppState>,
    shutdown: Arc<dyn shutdown::Shutdown>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(state))
        .app_data(Data::from(shutdown))
        .route("/health", web::get().to(handlers::health))
        .route("/restart", web::post().to(handlers::restart))
        .service(
            web::scope("/v1").route(
                "/chat/completions",
                web::post().to(handlers::chat_completion),
            ),
        )
}
