use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users;
mod m20260101_000002_create_lookup_tables;
mod m20260101_000003_create_organizations;
mod m20260101_000004_create_user_organization_roles;
mod m20260101_000005_create_sites;
mod m20260101_000006_create_surveys;
mod m20260101_000007_create_measurements;
mod m20260101_000008_create_notes;
mod m20260101_000009_create_images;
mod m20260101_000010_seed_lookup_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users::Migration),
            Box::new(m20260101_000002_create_lookup_tables::Migration),
            Box::new(m20260101_000003_create_organizations::Migration),
            Box::new(m20260101_000004_create_user_organization_roles::Migration),
            Box::new(m20260101_000005_create_sites::Migration),
            Box::new(m20260101_000006_create_surveys::Migration),
            Box::new(m20260101_000007_create_measurements::Migration),
            Box::new(m20260101_000008_create_notes::Migration),
            Box::new(m20260101_000009_create_images::Migration),
            Box::new(m20260101_000010_seed_lookup_tables::Migration),
        ]
    }
}
