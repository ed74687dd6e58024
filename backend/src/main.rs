mod config;
mod services;

use crate::config::HostConfig;
use crate::services::ui::LandingPath;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let landing_url = format!("{}{}", url, config.landing_path);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&landing_url);
        });
    }

    info!("Serving store market mapping UI at {}{}", url, config.landing_path);

    let landing = web::Data::new(LandingPath(config.landing_path.clone()));
    HttpServer::new(move || {
        App::new()
            .app_data(landing.clone())
            .configure(services::ui::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
