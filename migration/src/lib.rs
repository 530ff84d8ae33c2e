pub use sea_orm_migration::prelude::*;

mod m20260815_000001_user;
mod m20260815_000002_alliance;
mod m20260815_000003_alliance_member;
mod m20260815_000004_battle_event;
mod m20260815_000005_military_stats;
mod m20260815_000006_resource_stats;
mod m20260815_000007_development_stats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_user::Migration),
            Box::new(m20260815_000002_alliance::Migration),
            Box::new(m20260815_000003_alliance_member::Migration),
            Box::new(m20260815_000004_battle_event::Migration),
            Box::new(m20260815_000005_military_stats::Migration),
            Box::new(m20260815_000006_resource_stats::Migration),
            Box::new(m20260815_000007_development_stats::Migration),
        ]
    }
}
