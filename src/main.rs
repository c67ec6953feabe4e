use std::io;

use actix_web::{App, HttpServer, web};

use deskbook::db::establish_connection_pool;
use deskbook::models::config::ServerConfig;
use deskbook::repository::DieselRepository;
use deskbook::routes::booking::create_booking;
use deskbook::routes::filter::{filter_spaces, list_space_types, suggest_locations};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("deskbook").required(false))
        .add_source(config::Environment::with_prefix("DESKBOOK"))
        .build()
        .and_then(|settings| settings.try_deserialize())
        .map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting deskbook server on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .service(filter_spaces)
            .service(suggest_locations)
            .service(list_space_types)
            .service(create_booking)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
