use crate::domain::member::Member;
use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::domain::team::Team;

const SAMPLE_MEMBERS: i32 = 100;

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { teams: usize, members: usize },
    AlreadyPresent,
}

/// Loads sample teams and members for local development
///
/// Creates `teamA` and `teamB`, then `member0..member99` with `age = i`,
/// even indices in teamA and odd ones in teamB. Does nothing when `teamA`
/// already exists, so restarting against the same database is safe.
pub async fn seed_sample_data(
    teams: &dyn TeamRepository,
    members: &dyn MemberRepository,
) -> Result<SeedOutcome, String> {
    if teams.find_by_name("teamA").await?.is_some() {
        tracing::info!("Sample data already present, skipping seed");
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let team_a = Team::new("teamA")?;
    let team_b = Team::new("teamB")?;
    teams.save(&team_a).await?;
    teams.save(&team_b).await?;

    for i in 0..SAMPLE_MEMBERS {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let member = Member::new(Some(format!("member{}", i)), i, Some(team))?;
        members.save(&member).await?;
    }

    tracing::info!(teams = 2, members = SAMPLE_MEMBERS, "Seeded sample data");

    Ok(SeedOutcome::Seeded {
        teams: 2,
        members: SAMPLE_MEMBERS as usize,
    })
}
