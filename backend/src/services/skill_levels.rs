use log::info;
use rusqlite::Connection;

use crate::database::{skill_levels, SkillLevelFilter};
use crate::domain::{SkillLevel, SkillLevelUpdate};
use crate::errors::{constraint_as_conflict, AppError, AppResult};

fn validate(level: &SkillLevel) -> AppResult<()> {
    if level.title.trim().is_empty() {
        return Err(AppError::validation("skill level title must not be empty"));
    }
    if level.rating_lower_bound < 0 || level.rating_upper_bound < 0 {
        return Err(AppError::validation("rating bounds must not be negative"));
    }
    if level.rating_lower_bound > level.rating_upper_bound {
        return Err(AppError::validation(format!(
            "lower bound {} exceeds upper bound {}",
            level.rating_lower_bound, level.rating_upper_bound
        )));
    }
    Ok(())
}

fn duplicate_title(title: &str) -> String {
    format!("skill level '{title}' already exists")
}

pub fn create_skill_level(conn: &Connection, level: &SkillLevel) -> AppResult<SkillLevel> {
    validate(level)?;

    let created = skill_levels::insert_skill_level(conn, level)
        .map_err(|e| constraint_as_conflict(e, &duplicate_title(&level.title)))?;
    info!(
        "Created skill level '{}' [{}, {}]",
        created.title, created.rating_lower_bound, created.rating_upper_bound
    );
    Ok(created)
}

pub fn get_skill_level(conn: &Connection, title: &str) -> AppResult<SkillLevel> {
    skill_levels::find_by_title(conn, title)?
        .ok_or_else(|| AppError::not_found("skill level", format!("'{title}'")))
}

/// Every level, or only the one covering `filter.rating`
pub fn list_skill_levels(conn: &Connection, filter: &SkillLevelFilter) -> AppResult<Vec<SkillLevel>> {
    match filter.rating {
        Some(rating) => Ok(skill_levels::find_by_rating(conn, rating)?.into_iter().collect()),
        None => Ok(skill_levels::list_all(conn)?),
    }
}

pub fn update_skill_level(
    conn: &Connection,
    title: &str,
    update: &SkillLevelUpdate,
) -> AppResult<SkillLevel> {
    let mut level = get_skill_level(conn, title)?;

    if let Some(new_title) = &update.title {
        level.title = new_title.clone();
    }
    if let Some(lower) = update.rating_lower_bound {
        level.rating_lower_bound = lower;
    }
    if let Some(upper) = update.rating_upper_bound {
        level.rating_upper_bound = upper;
    }
    validate(&level)?;

    let updated = skill_levels::update_skill_level(conn, title, &level)
        .map_err(|e| constraint_as_conflict(e, &duplicate_title(&level.title)))?;
    if !updated {
        return Err(AppError::not_found("skill level", format!("'{title}'")));
    }
    info!("Updated skill level '{}'", level.title);
    Ok(level)
}

pub fn delete_skill_level(conn: &Connection, title: &str) -> AppResult<()> {
    if !skill_levels::delete_by_title(conn, title)? {
        return Err(AppError::not_found("skill level", format!("'{title}'")));
    }
    info!("Deleted skill level '{}'", title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, skill_level};

    #[test]
    fn test_bounds_are_validated() {
        let conn = memory_db();

        assert!(matches!(
            create_skill_level(&conn, &skill_level("Upside Down", 1500, 1400)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create_skill_level(&conn, &skill_level("Below Zero", -5, 100)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_titles_conflict() {
        let conn = memory_db();
        create_skill_level(&conn, &skill_level("Novice", 0, 999)).unwrap();
        create_skill_level(&conn, &skill_level("Club", 1000, 1799)).unwrap();

        assert!(matches!(
            create_skill_level(&conn, &skill_level("Novice", 0, 500)),
            Err(AppError::Conflict(_))
        ));

        let rename = SkillLevelUpdate {
            title: Some("Novice".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update_skill_level(&conn, "Club", &rename),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_partial_update_revalidates_bounds() {
        let conn = memory_db();
        create_skill_level(&conn, &skill_level("Club", 1000, 1799)).unwrap();

        let bad = SkillLevelUpdate {
            rating_lower_bound: Some(1900),
            ..Default::default()
        };
        assert!(matches!(
            update_skill_level(&conn, "Club", &bad),
            Err(AppError::Validation(_))
        ));

        let good = SkillLevelUpdate {
            rating_upper_bound: Some(1899),
            ..Default::default()
        };
        let updated = update_skill_level(&conn, "Club", &good).unwrap();
        assert_eq!(updated, skill_level("Club", 1000, 1899));
    }

    #[test]
    fn test_filter_by_rating() {
        let conn = memory_db();
        create_skill_level(&conn, &skill_level("Club", 1000, 1799)).unwrap();
        create_skill_level(&conn, &skill_level("Expert", 1800, 2199)).unwrap();

        let by_rating = |rating| {
            list_skill_levels(&conn, &SkillLevelFilter { rating: Some(rating) })
                .unwrap()
                .into_iter()
                .map(|level| level.title)
                .collect::<Vec<_>>()
        };
        assert_eq!(by_rating(1799), vec!["Club"]);
        assert_eq!(by_rating(1800), vec!["Expert"]);
        assert!(by_rating(2500).is_empty());
    }
}
