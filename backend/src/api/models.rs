use serde::Deserialize;

/// Body of `POST /players/:id/rating-adjustment`
#[derive(Debug, Deserialize)]
pub struct RatingAdjustment {
    pub increment: i64,
}

#[derive(Debug, Deserialize)]
pub struct TournamentNameQuery {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BracketParams {
    /// Overrides the configured seed for this draw only
    pub seed: Option<u64>,
}
