use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn account<'a>(&'a mut self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
