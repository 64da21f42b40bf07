use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn settings<'a>(&'a mut self) -> SettingsFixtures<'a> {
        SettingsFixtures { setup: self }
    }
}

pub struct SettingsFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
