use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    games, mentorships, players, relations, skill_levels, tournaments, violations, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/players", get(players::list_players).post(players::create_player))
        .route(
            "/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route(
            "/players/:id/rating-adjustment",
            post(players::adjust_player_rating),
        )
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/tournaments/:id",
            get(tournaments::get_tournament)
                .put(tournaments::update_tournament)
                .delete(tournaments::delete_tournament),
        )
        .route("/tournaments/:id/participants", get(tournaments::get_participants))
        .route("/tournaments/:id/bracket", post(tournaments::create_bracket))
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/:id",
            get(games::get_game).put(games::update_game).delete(games::delete_game),
        )
        .route(
            "/skill-levels",
            get(skill_levels::list_skill_levels).post(skill_levels::create_skill_level),
        )
        .route(
            "/skill-levels/:title",
            get(skill_levels::get_skill_level)
                .put(skill_levels::update_skill_level)
                .delete(skill_levels::delete_skill_level),
        )
        .route(
            "/violations",
            get(violations::list_violations).post(violations::create_violation),
        )
        .route(
            "/violations/:id",
            get(violations::get_violation)
                .put(violations::update_violation)
                .delete(violations::delete_violation),
        )
        .route(
            "/mentorships",
            get(mentorships::list_mentorships).post(mentorships::create_mentorship),
        )
        .route(
            "/mentorships/:player_id/:mentor_id",
            get(mentorships::get_mentorship)
                .put(mentorships::repoint_mentorship)
                .delete(mentorships::delete_mentorship),
        )
        .route("/relations/top-players", get(relations::get_top_players))
        .route("/relations/player-summary/:id", get(relations::get_player_summary))
        .route(
            "/relations/player-match-history/:id",
            get(relations::get_player_match_history),
        )
        .route(
            "/relations/head-to-head/:player_id/:opponent_id",
            get(relations::get_head_to_head),
        )
        .route(
            "/relations/tournament-participants",
            get(relations::get_tournament_participants),
        )
        .with_state(state)
}
