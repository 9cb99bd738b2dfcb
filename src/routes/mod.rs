use crate::utils::webutils::{json_error, path_error, query_error};
use actix_web::web;

pub mod ai;
pub mod health;
pub mod lzv;
pub mod matches;
pub mod players;
pub mod teams;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error));

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/Teams")
            .service(teams::list::list)
            .service(teams::create::create)
    );
    cfg.service(
        web::scope("/Players")
            .service(players::list::list)
            .service(players::create::create)
            .service(players::get::get_player)
            .service(players::update::update)
            .service(players::delete::delete_player)
    );
    cfg.service(
        web::scope("/Matches")
            .service(matches::list::list)
            .service(matches::create::create)
            .service(matches::get::get_match)
            .service(matches::update::update)
            .service(matches::delete::delete_match)
            .service(matches::attendance::attendance)
    );
    cfg.service(
        web::scope("/lzv")
            .service(lzv::matches::matches)
            .service(lzv::players::players)
            .service(lzv::stats::stats)
            .service(lzv::team::team)
    );
    cfg.service(web::scope("/ai").service(ai::opponent_analysis::opponent_analysis));
}
